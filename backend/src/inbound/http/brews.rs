//! Brew and steep HTTP handlers.
//!
//! ```text
//! GET    /brews
//! POST   /brews
//! GET    /brews/{id}
//! PATCH  /brews/{id}
//! DELETE /brews/{id}
//! GET    /brews/{id}/steeps
//! POST   /brews/{id}/steeps
//! GET    /teapots/{id}/brews
//! ```
//!
//! Relationship routes keep the generic `{id}` parameter name of the parent
//! resource. Routes addressing an existing record confirm it exists before
//! decoding the body or query string.

use actix_web::{HttpRequest, HttpResponse, delete, get, patch, post, web};
use chrono::SecondsFormat;
use pagination::Paginated;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Brew, BrewFilter, BrewInput, BrewPatchInput, BrewStatus, Steep, SteepInput};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{BrewListSchema, BrewStatusSchema, ErrorSchema, SteepListSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    Resource, decode_body, decode_query, page_request, parse_filter, parse_id_filter,
    parse_path_id,
};

/// Request payload for starting a brew.
///
/// `waterTempCelsius` defaults to the tea's steeping temperature.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrewRequestBody {
    #[schema(required = true, format = "uuid")]
    pub teapot_id: Option<String>,
    #[schema(required = true, format = "uuid")]
    pub tea_id: Option<String>,
    #[schema(minimum = 60, maximum = 100, example = 80)]
    pub water_temp_celsius: Option<i64>,
    #[schema(max_length = 500)]
    pub notes: Option<String>,
}

/// Partial brew update; omitted or `null` fields are left unchanged.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BrewPatchBody {
    #[schema(value_type = Option<BrewStatusSchema>)]
    pub status: Option<String>,
    #[schema(max_length = 500)]
    pub notes: Option<String>,
    #[schema(format = "date-time")]
    pub completed_at: Option<String>,
}

/// Brew as returned to clients.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = Brew)]
pub struct BrewBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(format = "uuid")]
    pub teapot_id: String,
    #[schema(format = "uuid")]
    pub tea_id: String,
    #[schema(value_type = BrewStatusSchema)]
    pub status: String,
    pub water_temp_celsius: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[schema(format = "date-time")]
    pub started_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(format = "date-time")]
    pub completed_at: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

/// Request payload for recording a steep.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SteepRequestBody {
    #[schema(required = true, minimum = 1, example = 30)]
    pub duration_seconds: Option<i64>,
    #[schema(minimum = 1, maximum = 5)]
    pub rating: Option<i64>,
    #[schema(max_length = 200)]
    pub notes: Option<String>,
}

/// Steep as returned to clients.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = Steep)]
pub struct SteepBody {
    #[schema(format = "uuid")]
    pub id: String,
    #[schema(format = "uuid")]
    pub brew_id: String,
    /// One-based position within the brew.
    pub steep_number: u32,
    pub duration_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: String,
}

/// Query parameters accepted by `GET /brews`.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BrewListQuery {
    /// Only brews in this status.
    #[param(value_type = Option<BrewStatusSchema>)]
    pub status: Option<String>,
    /// Only brews made in this teapot.
    #[param(format = Uuid)]
    pub teapot_id: Option<String>,
    /// Only brews of this tea.
    #[param(format = Uuid)]
    pub tea_id: Option<String>,
    /// One-based page number; `0` or absent means 1.
    #[param(minimum = 0)]
    pub page: Option<i64>,
    /// Page size; `0` or absent means 20.
    #[param(minimum = 0, maximum = 100)]
    pub limit: Option<i64>,
}

/// Paging parameters for relationship listings.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// One-based page number; `0` or absent means 1.
    #[param(minimum = 0)]
    pub page: Option<i64>,
    /// Page size; `0` or absent means 20.
    #[param(minimum = 0, maximum = 100)]
    pub limit: Option<i64>,
}

impl From<BrewRequestBody> for BrewInput {
    fn from(value: BrewRequestBody) -> Self {
        Self {
            teapot_id: value.teapot_id,
            tea_id: value.tea_id,
            water_temp_celsius: value.water_temp_celsius,
            notes: value.notes,
        }
    }
}

impl From<BrewPatchBody> for BrewPatchInput {
    fn from(value: BrewPatchBody) -> Self {
        Self {
            status: value.status,
            notes: value.notes,
            completed_at: value.completed_at,
        }
    }
}

impl From<SteepRequestBody> for SteepInput {
    fn from(value: SteepRequestBody) -> Self {
        Self {
            duration_seconds: value.duration_seconds,
            rating: value.rating,
            notes: value.notes,
        }
    }
}

impl From<Brew> for BrewBody {
    fn from(value: Brew) -> Self {
        Self {
            id: value.id.to_string(),
            teapot_id: value.teapot_id.to_string(),
            tea_id: value.tea_id.to_string(),
            status: value.status.to_string(),
            water_temp_celsius: value.water_temp_celsius,
            notes: value.notes,
            started_at: value.started_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            completed_at: value
                .completed_at
                .map(|at| at.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            created_at: value.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            updated_at: value.updated_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

impl From<Steep> for SteepBody {
    fn from(value: Steep) -> Self {
        Self {
            id: value.id.to_string(),
            brew_id: value.brew_id.to_string(),
            steep_number: value.steep_number,
            duration_seconds: value.duration_seconds,
            rating: value.rating,
            notes: value.notes,
            created_at: value.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

/// List brews, newest first.
#[utoipa::path(
    get,
    path = "/brews",
    params(BrewListQuery),
    responses(
        (status = 200, description = "Page of brews", body = BrewListSchema),
        (status = 400, description = "Invalid filter or page", body = ErrorSchema)
    ),
    tags = ["brews"],
    operation_id = "listBrews"
)]
#[get("/brews")]
pub async fn list_brews(
    state: web::Data<HttpState>,
    query: web::Query<BrewListQuery>,
) -> ApiResult<web::Json<Paginated<BrewBody>>> {
    let BrewListQuery {
        status,
        teapot_id,
        tea_id,
        page,
        limit,
    } = query.into_inner();
    let filter = BrewFilter {
        status: parse_filter(status, |raw| BrewStatus::parse_field(raw, "status"))?,
        teapot_id: parse_id_filter(teapot_id, "teapotId")?,
        tea_id: parse_id_filter(tea_id, "teaId")?,
    };
    let request = page_request(page, limit)?;

    let page = state.brews_query.list(filter, request).await?;
    Ok(web::Json(Paginated::from_page(
        page.map(BrewBody::from),
        &request,
    )))
}

/// Start a brew.
///
/// The referenced teapot and tea must exist; unknown references are
/// validation failures.
#[utoipa::path(
    post,
    path = "/brews",
    request_body = BrewRequestBody,
    responses(
        (status = 201, description = "Brew started", body = BrewBody),
        (status = 400, description = "Invalid request or unknown teapot/tea", body = ErrorSchema)
    ),
    tags = ["brews"],
    operation_id = "createBrew"
)]
#[post("/brews")]
pub async fn create_brew(
    state: web::Data<HttpState>,
    payload: web::Json<BrewRequestBody>,
) -> ApiResult<HttpResponse> {
    let brew = state.brews.create(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(BrewBody::from(brew)))
}

/// Fetch one brew.
#[utoipa::path(
    get,
    path = "/brews/{id}",
    params(("id" = uuid::Uuid, Path, description = "Brew identifier")),
    responses(
        (status = 200, description = "Brew", body = BrewBody),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Brew not found", body = ErrorSchema)
    ),
    tags = ["brews"],
    operation_id = "getBrew"
)]
#[get("/brews/{id}")]
pub async fn get_brew(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<BrewBody>> {
    let id = parse_path_id(&path, Resource::Brew)?;
    let brew = state.brews_query.get(id).await?;
    Ok(web::Json(brew.into()))
}

/// Update the status, notes or completion time of a brew.
#[utoipa::path(
    patch,
    path = "/brews/{id}",
    params(("id" = uuid::Uuid, Path, description = "Brew identifier")),
    request_body = BrewPatchBody,
    responses(
        (status = 200, description = "Brew updated", body = BrewBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Brew not found", body = ErrorSchema)
    ),
    tags = ["brews"],
    operation_id = "patchBrew"
)]
#[patch("/brews/{id}")]
pub async fn patch_brew(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Bytes,
) -> ApiResult<web::Json<BrewBody>> {
    let id = parse_path_id(&path, Resource::Brew)?;
    state.brews_query.get(id).await?;
    let body: BrewPatchBody = decode_body(&payload)?;
    let brew = state.brews.patch(id, body.into()).await?;
    Ok(web::Json(brew.into()))
}

/// Delete a brew.
#[utoipa::path(
    delete,
    path = "/brews/{id}",
    params(("id" = uuid::Uuid, Path, description = "Brew identifier")),
    responses(
        (status = 204, description = "Brew deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Brew not found", body = ErrorSchema)
    ),
    tags = ["brews"],
    operation_id = "deleteBrew"
)]
#[delete("/brews/{id}")]
pub async fn delete_brew(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, Resource::Brew)?;
    state.brews.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// List the steeps of a brew in ascending steep order.
#[utoipa::path(
    get,
    path = "/brews/{id}/steeps",
    params(("id" = uuid::Uuid, Path, description = "Brew identifier"), PageQuery),
    responses(
        (status = 200, description = "Page of steeps", body = SteepListSchema),
        (status = 400, description = "Malformed identifier or page", body = ErrorSchema),
        (status = 404, description = "Brew not found", body = ErrorSchema)
    ),
    tags = ["brews"],
    operation_id = "listSteeps"
)]
#[get("/brews/{id}/steeps")]
pub async fn list_steeps(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> ApiResult<web::Json<Paginated<SteepBody>>> {
    let brew_id = parse_path_id(&path, Resource::Brew)?;
    state.brews_query.get(brew_id).await?;
    let PageQuery { page, limit } = decode_query(&req)?;
    let request = page_request(page, limit)?;

    let page = state.brews_query.list_steeps(brew_id, request).await?;
    Ok(web::Json(Paginated::from_page(
        page.map(SteepBody::from),
        &request,
    )))
}

/// Record the next steep of a brew.
///
/// `steepNumber` is assigned as one more than the brew's existing steeps.
#[utoipa::path(
    post,
    path = "/brews/{id}/steeps",
    params(("id" = uuid::Uuid, Path, description = "Brew identifier")),
    request_body = SteepRequestBody,
    responses(
        (status = 201, description = "Steep recorded", body = SteepBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Brew not found", body = ErrorSchema)
    ),
    tags = ["brews"],
    operation_id = "createSteep"
)]
#[post("/brews/{id}/steeps")]
pub async fn create_steep(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Bytes,
) -> ApiResult<HttpResponse> {
    let brew_id = parse_path_id(&path, Resource::Brew)?;
    state.brews_query.get(brew_id).await?;
    let body: SteepRequestBody = decode_body(&payload)?;
    let steep = state.brews.add_steep(brew_id, body.into()).await?;
    Ok(HttpResponse::Created().json(SteepBody::from(steep)))
}

/// List the brews made in a teapot, newest first.
#[utoipa::path(
    get,
    path = "/teapots/{id}/brews",
    params(("id" = uuid::Uuid, Path, description = "Teapot identifier"), PageQuery),
    responses(
        (status = 200, description = "Page of brews", body = BrewListSchema),
        (status = 400, description = "Malformed identifier or page", body = ErrorSchema),
        (status = 404, description = "Teapot not found", body = ErrorSchema)
    ),
    tags = ["teapots"],
    operation_id = "listTeapotBrews"
)]
#[get("/teapots/{id}/brews")]
pub async fn list_teapot_brews(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> ApiResult<web::Json<Paginated<BrewBody>>> {
    let teapot_id = parse_path_id(&path, Resource::Teapot)?;
    state.teapots_query.get(teapot_id).await?;
    let PageQuery { page, limit } = decode_query(&req)?;
    let request = page_request(page, limit)?;

    let page = state
        .brews_query
        .list_for_teapot(teapot_id, request)
        .await?;
    Ok(web::Json(Paginated::from_page(
        page.map(BrewBody::from),
        &request,
    )))
}

#[cfg(test)]
#[path = "brews_tests.rs"]
mod tests;
