//! Builders wiring the in-memory store into HTTP and health state.
//!
//! The store is constructed by the caller and shared by every service, so a
//! test or the server binary decides its lifetime.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    BrewCommand, BrewQuery, ReadinessCheck, TeaCommand, TeaQuery, TeapotCommand, TeapotQuery,
};
use crate::domain::{BrewService, BrewServicePorts, TeaService, TeapotService};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;

/// Split one service into its command and query port handles.
fn build_service_pair<S, Cmd, Query>(
    service: S,
    cast: fn(Arc<S>) -> (Arc<Cmd>, Arc<Query>),
) -> (Arc<Cmd>, Arc<Query>)
where
    Cmd: ?Sized,
    Query: ?Sized,
{
    cast(Arc::new(service))
}

/// Build handler state over `store`, stamping records with `clock`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use tea_api::outbound::memory::InMemoryStore;
/// use tea_api::state_builders::build_http_state;
///
/// let state = build_http_state(Arc::new(InMemoryStore::new()), Arc::new(DefaultClock));
/// let _teapots = state.teapots.clone();
/// ```
pub fn build_http_state(store: Arc<InMemoryStore>, clock: Arc<dyn Clock>) -> HttpState {
    let (teapots, teapots_query) = build_service_pair(
        TeapotService::new(store.clone(), clock.clone()),
        |service| {
            (
                service.clone() as Arc<dyn TeapotCommand>,
                service as Arc<dyn TeapotQuery>,
            )
        },
    );
    let (teas, teas_query) = build_service_pair(
        TeaService::new(store.clone(), clock.clone()),
        |service| {
            (
                service.clone() as Arc<dyn TeaCommand>,
                service as Arc<dyn TeaQuery>,
            )
        },
    );
    let (brews, brews_query) = build_service_pair(
        BrewService::new(
            BrewServicePorts {
                teapots: store.clone(),
                teas: store.clone(),
                brews: store.clone(),
                steeps: store,
            },
            clock,
        ),
        |service| {
            (
                service.clone() as Arc<dyn BrewCommand>,
                service as Arc<dyn BrewQuery>,
            )
        },
    );

    HttpState {
        teapots,
        teapots_query,
        teas,
        teas_query,
        brews,
        brews_query,
    }
}

/// Build probe state that consults the store's readiness.
pub fn build_health_state(store: Arc<InMemoryStore>, clock: Arc<dyn Clock>) -> HealthState {
    HealthState::new(clock, vec![store as Arc<dyn ReadinessCheck>])
}
