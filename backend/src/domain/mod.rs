//! Domain primitives, aggregates and services.
//!
//! Purpose: define the teapot, tea, brew and steep aggregates, the rules
//! that validate client input for them, and the services that implement the
//! driving ports. Nothing here knows about HTTP or storage technology.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic error payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Aggregates: `Teapot`, `Tea`, `Brew`, `Steep` plus their drafts, patches
//!   and filters.
//! - Services: `TeapotService`, `TeaService`, `BrewService`.

pub mod brew;
mod brew_service;
pub mod error;
pub mod patch;
pub mod ports;
pub mod steep;
pub mod tea;
mod tea_service;
pub mod teapot;
mod teapot_service;
pub mod validation;
mod wire_enum;

pub use self::brew::{
    Brew, BrewDraft, BrewFilter, BrewInput, BrewPatch, BrewPatchInput, BrewStatus, parse_uuid,
};
pub use self::brew_service::{BrewService, BrewServicePorts};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::patch::Patch;
pub use self::steep::{Steep, SteepDraft, SteepInput};
pub use self::tea::{CaffeineLevel, Tea, TeaDraft, TeaFilter, TeaInput, TeaPatch, TeaType};
pub use self::tea_service::TeaService;
pub use self::teapot::{
    Teapot, TeapotDraft, TeapotFilter, TeapotInput, TeapotMaterial, TeapotPatch, TeapotStyle,
};
pub use self::teapot_service::TeapotService;
pub use self::validation::FieldError;
pub use self::wire_enum::UnknownVariantError;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use tea_api::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("Teapot not found"))
/// }
/// # assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
