//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::configure;
use crate::inbound::http::error::route_not_found;
use crate::inbound::http::health::{HealthState, health, live, ready};
use crate::inbound::http::state::HttpState;

/// Shared state handed to every worker's [`App`].
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
}

/// Assemble the application: trace middleware, resource routes, health
/// probes, Swagger UI (debug builds) and the JSON not-found fallback.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::web;
/// use mockable::DefaultClock;
/// use tea_api::outbound::memory::InMemoryStore;
/// use tea_api::server::{AppDependencies, build_app};
/// use tea_api::state_builders::{build_health_state, build_http_state};
///
/// let store = Arc::new(InMemoryStore::new());
/// let clock = Arc::new(DefaultClock);
/// let _app = build_app(AppDependencies {
///     health_state: web::Data::new(build_health_state(store.clone(), clock.clone())),
///     http_state: web::Data::new(build_http_state(store, clock)),
/// });
/// ```
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
        .service(health)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::route().to(route_not_found))
}

/// Construct an Actix HTTP server over the provided state and configuration.
///
/// The readiness probe flips to ready once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(deps: AppDependencies, config: ServerConfig) -> std::io::Result<Server> {
    let health_state = deps.health_state.clone();
    let ServerConfig { bind_addr } = config;

    let server = HttpServer::new(move || build_app(deps.clone()))
        .bind(bind_addr)?
        .run();

    health_state.mark_ready();
    info!(%bind_addr, "server listening");
    Ok(server)
}
