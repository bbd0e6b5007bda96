//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! Enumerations are documented with their exhaustive wire values; list
//! envelopes pair a page of bodies with [`PaginationSchema`].

use utoipa::ToSchema;

use crate::inbound::http::brews::{BrewBody, SteepBody};
use crate::inbound::http::teapots::TeapotBody;
use crate::inbound::http::teas::TeaBody;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "VALIDATION_ERROR")]
    ValidationError,
    /// The requested resource does not exist.
    #[schema(rename = "NOT_FOUND")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "INTERNAL_ERROR")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = Error)]
#[serde(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "VALIDATION_ERROR")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Invalid teapot ID format")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Offending field and violation code for validation failures.
    #[schema(value_type = Option<Object>)]
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::TeapotMaterial`].
#[derive(ToSchema)]
#[schema(as = TeapotMaterial)]
pub enum TeapotMaterialSchema {
    #[schema(rename = "ceramic")]
    Ceramic,
    #[schema(rename = "cast-iron")]
    CastIron,
    #[schema(rename = "glass")]
    Glass,
    #[schema(rename = "porcelain")]
    Porcelain,
    #[schema(rename = "clay")]
    Clay,
    #[schema(rename = "stainless-steel")]
    StainlessSteel,
}

/// OpenAPI schema for [`crate::domain::TeapotStyle`].
#[derive(ToSchema)]
#[schema(as = TeapotStyle)]
pub enum TeapotStyleSchema {
    #[schema(rename = "kyusu")]
    Kyusu,
    #[schema(rename = "gaiwan")]
    Gaiwan,
    #[schema(rename = "english")]
    English,
    #[schema(rename = "moroccan")]
    Moroccan,
    #[schema(rename = "turkish")]
    Turkish,
    #[schema(rename = "yixing")]
    Yixing,
}

/// OpenAPI schema for [`crate::domain::TeaType`].
#[derive(ToSchema)]
#[schema(as = TeaType)]
pub enum TeaTypeSchema {
    #[schema(rename = "green")]
    Green,
    #[schema(rename = "black")]
    Black,
    #[schema(rename = "oolong")]
    Oolong,
    #[schema(rename = "white")]
    White,
    #[schema(rename = "puerh")]
    Puerh,
    #[schema(rename = "herbal")]
    Herbal,
    #[schema(rename = "rooibos")]
    Rooibos,
}

/// OpenAPI schema for [`crate::domain::CaffeineLevel`].
#[derive(ToSchema)]
#[schema(as = CaffeineLevel)]
pub enum CaffeineLevelSchema {
    #[schema(rename = "none")]
    None,
    #[schema(rename = "low")]
    Low,
    #[schema(rename = "medium")]
    Medium,
    #[schema(rename = "high")]
    High,
}

/// OpenAPI schema for [`crate::domain::BrewStatus`].
#[derive(ToSchema)]
#[schema(as = BrewStatus)]
pub enum BrewStatusSchema {
    #[schema(rename = "preparing")]
    Preparing,
    #[schema(rename = "steeping")]
    Steeping,
    #[schema(rename = "ready")]
    Ready,
    #[schema(rename = "served")]
    Served,
    #[schema(rename = "cold")]
    Cold,
}

/// OpenAPI schema for [`pagination::Pagination`].
#[derive(ToSchema)]
#[schema(as = Pagination)]
#[serde(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PaginationSchema {
    #[schema(example = 1)]
    page: u32,
    #[schema(example = 20)]
    limit: u32,
    /// Matching records across all pages.
    #[schema(example = 42)]
    total: u64,
    #[schema(example = 3)]
    total_pages: u64,
}

/// Paginated list of teapots.
#[derive(ToSchema)]
#[schema(as = TeapotList)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TeapotListSchema {
    data: Vec<TeapotBody>,
    pagination: PaginationSchema,
}

/// Paginated list of teas.
#[derive(ToSchema)]
#[schema(as = TeaList)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TeaListSchema {
    data: Vec<TeaBody>,
    pagination: PaginationSchema,
}

/// Paginated list of brews.
#[derive(ToSchema)]
#[schema(as = BrewList)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BrewListSchema {
    data: Vec<BrewBody>,
    pagination: PaginationSchema,
}

/// Paginated list of steeps in ascending steep order.
#[derive(ToSchema)]
#[schema(as = SteepList)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct SteepListSchema {
    data: Vec<SteepBody>,
    pagination: PaginationSchema,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn error_code_schema_lists_wire_codes() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        assert_eq!(ErrorCodeSchema::name(), "ErrorCode");
        for code in ["VALIDATION_ERROR", "NOT_FOUND", "INTERNAL_ERROR"] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[rstest]
    fn error_schema_uses_camel_case() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "Error");
        assert!(schema_json.contains("traceId"));
        assert!(!schema_json.contains("trace_id"));
    }

    #[rstest]
    fn material_schema_uses_hyphenated_values() {
        let schema_json = schema_to_json::<TeapotMaterialSchema>();
        assert!(schema_json.contains("cast-iron"));
        assert!(schema_json.contains("stainless-steel"));
    }

    #[rstest]
    #[case(TeapotStyleSchema::name(), "TeapotStyle")]
    #[case(TeaTypeSchema::name(), "TeaType")]
    #[case(CaffeineLevelSchema::name(), "CaffeineLevel")]
    #[case(BrewStatusSchema::name(), "BrewStatus")]
    #[case(PaginationSchema::name(), "Pagination")]
    fn schema_names_match_domain_types(
        #[case] name: std::borrow::Cow<'static, str>,
        #[case] expected: &str,
    ) {
        assert_eq!(name, expected);
    }

    #[rstest]
    fn pagination_schema_uses_camel_case() {
        let schema_json = schema_to_json::<PaginationSchema>();
        assert!(schema_json.contains("totalPages"));
    }

    #[rstest]
    fn list_schemas_wrap_data_and_pagination() {
        let schema_json = schema_to_json::<SteepListSchema>();
        assert!(schema_json.contains("\"data\""));
        assert!(schema_json.contains("\"pagination\""));
    }
}
