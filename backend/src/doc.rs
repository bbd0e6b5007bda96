//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer (teapots, teas,
//!   brews, steeps, health and the coffee refusal)
//! - **Schemas**: request and response bodies plus wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`], the enum schemas) that describe
//!   domain types without coupling them to utoipa
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::brews::{
    BrewBody, BrewPatchBody, BrewRequestBody, SteepBody, SteepRequestBody,
};
use crate::inbound::http::health::{
    CheckBody, HealthBody, LivenessBody, ReadinessBody, TeapotRefusalBody,
};
use crate::inbound::http::schemas::{
    BrewListSchema, BrewStatusSchema, CaffeineLevelSchema, ErrorCodeSchema, ErrorSchema,
    PaginationSchema, SteepListSchema, TeaListSchema, TeaTypeSchema, TeapotListSchema,
    TeapotMaterialSchema, TeapotStyleSchema,
};
use crate::inbound::http::teapots::{TeapotBody, TeapotPatchBody, TeapotRequestBody};
use crate::inbound::http::teas::{TeaBody, TeaPatchBody, TeaRequestBody};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tea API",
        description = "Teapot, tea, brew and steep records held in process memory.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::teapots::list_teapots,
        crate::inbound::http::teapots::create_teapot,
        crate::inbound::http::teapots::get_teapot,
        crate::inbound::http::teapots::update_teapot,
        crate::inbound::http::teapots::patch_teapot,
        crate::inbound::http::teapots::delete_teapot,
        crate::inbound::http::brews::list_teapot_brews,
        crate::inbound::http::teas::list_teas,
        crate::inbound::http::teas::create_tea,
        crate::inbound::http::teas::get_tea,
        crate::inbound::http::teas::update_tea,
        crate::inbound::http::teas::patch_tea,
        crate::inbound::http::teas::delete_tea,
        crate::inbound::http::brews::list_brews,
        crate::inbound::http::brews::create_brew,
        crate::inbound::http::brews::get_brew,
        crate::inbound::http::brews::patch_brew,
        crate::inbound::http::brews::delete_brew,
        crate::inbound::http::brews::list_steeps,
        crate::inbound::http::brews::create_steep,
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::health::brew_coffee,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        PaginationSchema,
        TeapotMaterialSchema,
        TeapotStyleSchema,
        TeaTypeSchema,
        CaffeineLevelSchema,
        BrewStatusSchema,
        TeapotBody,
        TeapotRequestBody,
        TeapotPatchBody,
        TeapotListSchema,
        TeaBody,
        TeaRequestBody,
        TeaPatchBody,
        TeaListSchema,
        BrewBody,
        BrewRequestBody,
        BrewPatchBody,
        BrewListSchema,
        SteepBody,
        SteepRequestBody,
        SteepListSchema,
        HealthBody,
        LivenessBody,
        CheckBody,
        ReadinessBody,
        TeapotRefusalBody,
    )),
    tags(
        (name = "teapots", description = "Teapot records and their brews"),
        (name = "teas", description = "Tea records"),
        (name = "brews", description = "Brew sessions and their steeps"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "compliance", description = "Coffee refusal")
    )
)]
pub struct ApiDoc;
