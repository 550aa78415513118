//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ShellSettings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use ecosystem_shell::Trace;
#[cfg(debug_assertions)]
use ecosystem_shell::doc::ApiDoc;
use ecosystem_shell::domain::{DemoStore, StoreRuntime};
use ecosystem_shell::inbound::http::health::{HealthState, live, ready};
use ecosystem_shell::inbound::http::{HttpState, api_scope};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the HTTP server around a fresh store.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        notification_ttl,
    } = config;
    let store = Arc::new(DemoStore::new(StoreRuntime::default(), notification_ttl));
    let http_state = web::Data::new(HttpState::new(store));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    info!(%bind_addr, ttl = ?notification_ttl.as_duration(), "listening");
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use ecosystem_shell::domain::{NotificationTtl, TRACE_ID_HEADER};

    fn app_parts() -> (web::Data<HealthState>, web::Data<HttpState>) {
        let store = DemoStore::new(StoreRuntime::default(), NotificationTtl::default());
        (
            web::Data::new(HealthState::new()),
            web::Data::new(HttpState::new(Arc::new(store))),
        )
    }

    #[actix_web::test]
    async fn api_responses_carry_trace_ids() {
        let (health, http) = app_parts();
        let app = test::init_service(build_app(health, http)).await;
        let request = test::TestRequest::get().uri("/api/v1/session").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(TRACE_ID_HEADER));
    }

    #[actix_web::test]
    async fn probes_are_mounted_outside_the_api_scope() {
        let (health, http) = app_parts();
        health.mark_ready();
        let app = test::init_service(build_app(health, http)).await;
        let request = test::TestRequest::get().uri("/health/ready").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
