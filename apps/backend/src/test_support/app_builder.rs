//! Given an AppState, build an initialized Actix **test service**.

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::Error as ActixError;
use actix_web::{web, App};

use crate::error::AppError;
use crate::middleware::request_trace::RequestTrace;
use crate::middleware::trace_span::TraceSpan;
use crate::state::app_state::AppState;

pub fn create_test_app_builder(state: AppState) -> TestAppBuilder {
    TestAppBuilder { state }
}

/// Production routes over `state`.
pub async fn create_test_app(
    state: AppState,
) -> Result<
    impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError>,
    AppError,
> {
    create_test_app_builder(state).build().await
}

pub struct TestAppBuilder {
    state: AppState,
}

impl TestAppBuilder {
    /// Build and initialize the Actix test service.
    ///
    /// The service carries the same trace middleware as the server, so error
    /// bodies have real trace ids.
    pub async fn build(
        self,
    ) -> Result<
        impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError>,
        AppError,
    > {
        let app = App::new()
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(self.state))
            .configure(crate::routes::configure);

        let srv = actix_web::test::init_service(app).await;
        Ok(srv)
    }
}
