//! Backend entry-point: loads settings, wires the in-memory store into the
//! REST surface and serves it.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use tea_api::config::ServerSettings;
use tea_api::outbound::memory::InMemoryStore;
use tea_api::server::{AppDependencies, ServerConfig, create_server};
use tea_api::state_builders::{build_health_state, build_http_state};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let store = Arc::new(InMemoryStore::new());
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let deps = AppDependencies {
        health_state: web::Data::new(build_health_state(store.clone(), clock.clone())),
        http_state: web::Data::new(build_http_state(store, clock)),
    };

    let draining = deps.health_state.clone();
    let server = create_server(deps, ServerConfig::new(bind_addr))?;
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            draining.mark_unhealthy();
            info!("shutdown requested; liveness now reports down");
        }
    });

    server.await
}
