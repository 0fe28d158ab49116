use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use backend::routes;
use backend::state::app_state::AppState;
use backend::AppError;

/// Assembles an in-process service with the production middleware stack
/// (minus CORS) around a chosen route table.
pub struct TestAppBuilder {
    state: AppState,
    routes: fn(&mut web::ServiceConfig),
}

fn no_routes(_: &mut web::ServiceConfig) {}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            routes: no_routes,
        }
    }

    /// Serve the same table `main` mounts
    pub fn with_prod_routes(self) -> Self {
        self.with_routes(routes::configure)
    }

    pub fn with_routes(mut self, routes: fn(&mut web::ServiceConfig)) -> Self {
        self.routes = routes;
        self
    }

    pub async fn build(
        self,
    ) -> Result<impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>, AppError>
    {
        let app = App::new()
            .app_data(web::Data::new(self.state))
            .configure(self.routes)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace);

        Ok(test::init_service(app).await)
    }
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
