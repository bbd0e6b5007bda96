//! Tea HTTP handlers.
//!
//! ```text
//! GET    /teas
//! POST   /teas
//! GET    /teas/{id}
//! PUT    /teas/{id}
//! PATCH  /teas/{id}
//! DELETE /teas/{id}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use chrono::SecondsFormat;
use pagination::Paginated;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{CaffeineLevel, Tea, TeaFilter, TeaInput, TeaType};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    CaffeineLevelSchema, ErrorSchema, TeaListSchema, TeaTypeSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    Resource, decode_body, page_request, parse_filter, parse_path_id,
};

/// Tea attributes for creation and full replacement.
///
/// `caffeineLevel` defaults to `medium` on creation and is required on
/// replacement.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeaRequestBody {
    #[schema(required = true, min_length = 1, max_length = 100, example = "Dragon Well")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[schema(required = true, value_type = TeaTypeSchema)]
    pub tea_type: Option<String>,
    #[schema(max_length = 100, example = "Hangzhou, China")]
    pub origin: Option<String>,
    #[schema(value_type = Option<CaffeineLevelSchema>)]
    pub caffeine_level: Option<String>,
    #[schema(required = true, minimum = 60, maximum = 100, example = 80)]
    pub steep_temp_celsius: Option<i64>,
    #[schema(required = true, minimum = 1, maximum = 600, example = 120)]
    pub steep_time_seconds: Option<i64>,
    #[schema(max_length = 1000)]
    pub description: Option<String>,
}

/// Partial tea update; omitted or `null` fields are left unchanged.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeaPatchBody {
    #[schema(min_length = 1, max_length = 100)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[schema(value_type = Option<TeaTypeSchema>)]
    pub tea_type: Option<String>,
    #[schema(max_length = 100)]
    pub origin: Option<String>,
    #[schema(value_type = Option<CaffeineLevelSchema>)]
    pub caffeine_level: Option<String>,
    #[schema(minimum = 60, maximum = 100)]
    pub steep_temp_celsius: Option<i64>,
    #[schema(minimum = 1, maximum = 600)]
    pub steep_time_seconds: Option<i64>,
    #[schema(max_length = 1000)]
    pub description: Option<String>,
}

/// Tea as returned to clients.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = Tea)]
pub struct TeaBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    #[schema(value_type = TeaTypeSchema)]
    pub tea_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[schema(value_type = CaffeineLevelSchema)]
    pub caffeine_level: String,
    pub steep_temp_celsius: u8,
    pub steep_time_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

/// Query parameters accepted by `GET /teas`.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TeaListQuery {
    /// Only teas of this type.
    #[serde(rename = "type")]
    #[param(value_type = Option<TeaTypeSchema>)]
    pub tea_type: Option<String>,
    /// Only teas with this caffeine level.
    #[param(value_type = Option<CaffeineLevelSchema>)]
    pub caffeine_level: Option<String>,
    /// One-based page number; `0` or absent means 1.
    #[param(minimum = 0)]
    pub page: Option<i64>,
    /// Page size; `0` or absent means 20.
    #[param(minimum = 0, maximum = 100)]
    pub limit: Option<i64>,
}

impl From<TeaRequestBody> for TeaInput {
    fn from(value: TeaRequestBody) -> Self {
        Self {
            name: value.name,
            tea_type: value.tea_type,
            origin: value.origin,
            caffeine_level: value.caffeine_level,
            steep_temp_celsius: value.steep_temp_celsius,
            steep_time_seconds: value.steep_time_seconds,
            description: value.description,
        }
    }
}

impl From<TeaPatchBody> for TeaInput {
    fn from(value: TeaPatchBody) -> Self {
        Self {
            name: value.name,
            tea_type: value.tea_type,
            origin: value.origin,
            caffeine_level: value.caffeine_level,
            steep_temp_celsius: value.steep_temp_celsius,
            steep_time_seconds: value.steep_time_seconds,
            description: value.description,
        }
    }
}

impl From<Tea> for TeaBody {
    fn from(value: Tea) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            tea_type: value.tea_type.to_string(),
            origin: value.origin,
            caffeine_level: value.caffeine_level.to_string(),
            steep_temp_celsius: value.steep_temp_celsius,
            steep_time_seconds: value.steep_time_seconds,
            description: value.description,
            created_at: value.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            updated_at: value.updated_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

/// List teas, newest first.
#[utoipa::path(
    get,
    path = "/teas",
    params(TeaListQuery),
    responses(
        (status = 200, description = "Page of teas", body = TeaListSchema),
        (status = 400, description = "Invalid filter or page", body = ErrorSchema)
    ),
    tags = ["teas"],
    operation_id = "listTeas"
)]
#[get("/teas")]
pub async fn list_teas(
    state: web::Data<HttpState>,
    query: web::Query<TeaListQuery>,
) -> ApiResult<web::Json<Paginated<TeaBody>>> {
    let TeaListQuery {
        tea_type,
        caffeine_level,
        page,
        limit,
    } = query.into_inner();
    let filter = TeaFilter {
        tea_type: parse_filter(tea_type, |raw| TeaType::parse_field(raw, "type"))?,
        caffeine_level: parse_filter(caffeine_level, |raw| {
            CaffeineLevel::parse_field(raw, "caffeineLevel")
        })?,
    };
    let request = page_request(page, limit)?;

    let page = state.teas_query.list(filter, request).await?;
    Ok(web::Json(Paginated::from_page(page.map(TeaBody::from), &request)))
}

/// Create a tea.
#[utoipa::path(
    post,
    path = "/teas",
    request_body = TeaRequestBody,
    responses(
        (status = 201, description = "Tea created", body = TeaBody),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["teas"],
    operation_id = "createTea"
)]
#[post("/teas")]
pub async fn create_tea(
    state: web::Data<HttpState>,
    payload: web::Json<TeaRequestBody>,
) -> ApiResult<HttpResponse> {
    let tea = state.teas.create(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(TeaBody::from(tea)))
}

/// Fetch one tea.
#[utoipa::path(
    get,
    path = "/teas/{id}",
    params(("id" = uuid::Uuid, Path, description = "Tea identifier")),
    responses(
        (status = 200, description = "Tea", body = TeaBody),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Tea not found", body = ErrorSchema)
    ),
    tags = ["teas"],
    operation_id = "getTea"
)]
#[get("/teas/{id}")]
pub async fn get_tea(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TeaBody>> {
    let id = parse_path_id(&path, Resource::Tea)?;
    let tea = state.teas_query.get(id).await?;
    Ok(web::Json(tea.into()))
}

/// Replace every attribute of a tea.
#[utoipa::path(
    put,
    path = "/teas/{id}",
    params(("id" = uuid::Uuid, Path, description = "Tea identifier")),
    request_body = TeaRequestBody,
    responses(
        (status = 200, description = "Tea replaced", body = TeaBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Tea not found", body = ErrorSchema)
    ),
    tags = ["teas"],
    operation_id = "updateTea"
)]
#[put("/teas/{id}")]
pub async fn update_tea(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Bytes,
) -> ApiResult<web::Json<TeaBody>> {
    let id = parse_path_id(&path, Resource::Tea)?;
    state.teas_query.get(id).await?;
    let body: TeaRequestBody = decode_body(&payload)?;
    let tea = state.teas.replace(id, body.into()).await?;
    Ok(web::Json(tea.into()))
}

/// Update the supplied attributes of a tea.
#[utoipa::path(
    patch,
    path = "/teas/{id}",
    params(("id" = uuid::Uuid, Path, description = "Tea identifier")),
    request_body = TeaPatchBody,
    responses(
        (status = 200, description = "Tea updated", body = TeaBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Tea not found", body = ErrorSchema)
    ),
    tags = ["teas"],
    operation_id = "patchTea"
)]
#[patch("/teas/{id}")]
pub async fn patch_tea(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Bytes,
) -> ApiResult<web::Json<TeaBody>> {
    let id = parse_path_id(&path, Resource::Tea)?;
    state.teas_query.get(id).await?;
    let body: TeaPatchBody = decode_body(&payload)?;
    let tea = state.teas.patch(id, body.into()).await?;
    Ok(web::Json(tea.into()))
}

/// Delete a tea.
///
/// Brews that reference the tea are left in place.
#[utoipa::path(
    delete,
    path = "/teas/{id}",
    params(("id" = uuid::Uuid, Path, description = "Tea identifier")),
    responses(
        (status = 204, description = "Tea deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Tea not found", body = ErrorSchema)
    ),
    tags = ["teas"],
    operation_id = "deleteTea"
)]
#[delete("/teas/{id}")]
pub async fn delete_tea(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, Resource::Tea)?;
    state.teas.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "teas_tests.rs"]
mod tests;
