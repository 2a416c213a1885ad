use actix_web::web;

pub mod games;
pub mod health;

/// Register every route. `main.rs` and the test app builder both call this,
/// so tests exercise the same paths the server exposes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // /health
    cfg.configure(health::configure_routes);

    // /api/**
    cfg.service(web::scope("/api").configure(games::configure_routes));
}
