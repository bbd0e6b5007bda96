//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::Value;

use crate::inbound::http::configure;
use crate::inbound::http::error::route_not_found;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;
use crate::state_builders::build_http_state;
use crate::test_support::MutableClock;

/// Handler state over a fresh store plus the clock stamping its records.
pub fn memory_state() -> (HttpState, Arc<MutableClock>) {
    let clock = Arc::new(MutableClock::default());
    let state = build_http_state(Arc::new(InMemoryStore::new()), clock.clone());
    (state, clock)
}

/// Build an app serving every resource route over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure)
        .default_service(web::route().to(route_not_found))
}

/// Send `req` and decode the JSON body; `204` responses yield `null`.
pub async fn send(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    req: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let res = actix_test::call_service(app, req.to_request()).await;
    let status = res.status();
    if status == StatusCode::NO_CONTENT {
        return (status, Value::Null);
    }
    (status, actix_test::read_body_json(res).await)
}
