//! HTTP inbound adapter exposing REST endpoints.

pub mod brews;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod teapots;
pub mod teas;
#[cfg(test)]
pub mod test_utils;
mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register every resource route and the extractor error handlers.
///
/// Health probes are registered separately because they depend on
/// [`health::HealthState`] rather than [`state::HttpState`].
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use mockable::DefaultClock;
/// use tea_api::inbound::http::configure;
/// use tea_api::outbound::memory::InMemoryStore;
/// use tea_api::state_builders::build_http_state;
///
/// let state = build_http_state(Arc::new(InMemoryStore::new()), Arc::new(DefaultClock));
/// let _app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .app_data(error::query_config())
        .app_data(error::path_config())
        .service(teapots::list_teapots)
        .service(teapots::create_teapot)
        .service(teapots::get_teapot)
        .service(teapots::update_teapot)
        .service(teapots::patch_teapot)
        .service(teapots::delete_teapot)
        .service(brews::list_teapot_brews)
        .service(teas::list_teas)
        .service(teas::create_tea)
        .service(teas::get_tea)
        .service(teas::update_tea)
        .service(teas::patch_tea)
        .service(teas::delete_tea)
        .service(brews::list_brews)
        .service(brews::create_brew)
        .service(brews::get_brew)
        .service(brews::patch_brew)
        .service(brews::delete_brew)
        .service(brews::list_steeps)
        .service(brews::create_steep)
        .service(health::brew_coffee);
}
