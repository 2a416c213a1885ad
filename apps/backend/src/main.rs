use actix_web::{web, App, HttpServer};
use tracing::info;
use wordgame_backend::config::AppConfig;
use wordgame_backend::infra::state::build_state;
use wordgame_backend::middleware::cors::cors_middleware;
use wordgame_backend::middleware::request_trace::RequestTrace;
use wordgame_backend::middleware::structured_logger::StructuredLogger;
use wordgame_backend::middleware::trace_span::TraceSpan;
use wordgame_backend::{routes, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let app_state = build_state().with_config(&config).build();

    info!(
        host = %config.host,
        port = config.port,
        corpus = %config.corpus_path.display(),
        commentary = config.commentary.is_some(),
        "Starting word game backend"
    );

    let data = web::Data::new(app_state);
    let origins = config.cors_allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
