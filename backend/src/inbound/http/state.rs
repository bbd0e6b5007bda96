//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BrewCommand, BrewQuery, TeaCommand, TeaQuery, TeapotCommand, TeapotQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub teapots: Arc<dyn TeapotCommand>,
    pub teapots_query: Arc<dyn TeapotQuery>,
    pub teas: Arc<dyn TeaCommand>,
    pub teas_query: Arc<dyn TeaQuery>,
    pub brews: Arc<dyn BrewCommand>,
    pub brews_query: Arc<dyn BrewQuery>,
}
