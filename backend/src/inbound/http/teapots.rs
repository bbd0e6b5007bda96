//! Teapot HTTP handlers.
//!
//! ```text
//! GET    /teapots
//! POST   /teapots
//! GET    /teapots/{id}
//! PUT    /teapots/{id}
//! PATCH  /teapots/{id}
//! DELETE /teapots/{id}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use chrono::SecondsFormat;
use pagination::Paginated;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Teapot, TeapotFilter, TeapotInput, TeapotMaterial, TeapotStyle};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    ErrorSchema, TeapotListSchema, TeapotMaterialSchema, TeapotStyleSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    Resource, decode_body, page_request, parse_filter, parse_path_id,
};

/// Teapot attributes for creation and full replacement.
///
/// `style` defaults to `english` on creation and is required on replacement.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeapotRequestBody {
    #[schema(required = true, min_length = 1, max_length = 100, example = "My Kyusu")]
    pub name: Option<String>,
    #[schema(required = true, value_type = TeapotMaterialSchema)]
    pub material: Option<String>,
    #[schema(required = true, minimum = 1, maximum = 5000, example = 350)]
    pub capacity_ml: Option<i64>,
    #[schema(value_type = Option<TeapotStyleSchema>)]
    pub style: Option<String>,
    #[schema(max_length = 500)]
    pub description: Option<String>,
}

/// Partial teapot update; omitted or `null` fields are left unchanged.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeapotPatchBody {
    #[schema(min_length = 1, max_length = 100)]
    pub name: Option<String>,
    #[schema(value_type = Option<TeapotMaterialSchema>)]
    pub material: Option<String>,
    #[schema(minimum = 1, maximum = 5000)]
    pub capacity_ml: Option<i64>,
    #[schema(value_type = Option<TeapotStyleSchema>)]
    pub style: Option<String>,
    #[schema(max_length = 500)]
    pub description: Option<String>,
}

/// Teapot as returned to clients.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = Teapot)]
pub struct TeapotBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    #[schema(value_type = TeapotMaterialSchema)]
    pub material: String,
    pub capacity_ml: u32,
    #[schema(value_type = TeapotStyleSchema)]
    pub style: String,
    pub description: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: String,
    #[schema(format = "date-time")]
    pub updated_at: String,
}

/// Query parameters accepted by `GET /teapots`.
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TeapotListQuery {
    /// Only teapots made of this material.
    #[param(value_type = Option<TeapotMaterialSchema>)]
    pub material: Option<String>,
    /// Only teapots of this style.
    #[param(value_type = Option<TeapotStyleSchema>)]
    pub style: Option<String>,
    /// One-based page number; `0` or absent means 1.
    #[param(minimum = 0)]
    pub page: Option<i64>,
    /// Page size; `0` or absent means 20.
    #[param(minimum = 0, maximum = 100)]
    pub limit: Option<i64>,
}

impl From<TeapotRequestBody> for TeapotInput {
    fn from(value: TeapotRequestBody) -> Self {
        Self {
            name: value.name,
            material: value.material,
            capacity_ml: value.capacity_ml,
            style: value.style,
            description: value.description,
        }
    }
}

impl From<TeapotPatchBody> for TeapotInput {
    fn from(value: TeapotPatchBody) -> Self {
        Self {
            name: value.name,
            material: value.material,
            capacity_ml: value.capacity_ml,
            style: value.style,
            description: value.description,
        }
    }
}

impl From<Teapot> for TeapotBody {
    fn from(value: Teapot) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            material: value.material.to_string(),
            capacity_ml: value.capacity_ml,
            style: value.style.to_string(),
            description: value.description,
            created_at: value.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            updated_at: value.updated_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

/// List teapots, newest first.
#[utoipa::path(
    get,
    path = "/teapots",
    params(TeapotListQuery),
    responses(
        (status = 200, description = "Page of teapots", body = TeapotListSchema),
        (status = 400, description = "Invalid filter or page", body = ErrorSchema)
    ),
    tags = ["teapots"],
    operation_id = "listTeapots"
)]
#[get("/teapots")]
pub async fn list_teapots(
    state: web::Data<HttpState>,
    query: web::Query<TeapotListQuery>,
) -> ApiResult<web::Json<Paginated<TeapotBody>>> {
    let TeapotListQuery {
        material,
        style,
        page,
        limit,
    } = query.into_inner();
    let filter = TeapotFilter {
        material: parse_filter(material, |raw| TeapotMaterial::parse_field(raw, "material"))?,
        style: parse_filter(style, |raw| TeapotStyle::parse_field(raw, "style"))?,
    };
    let request = page_request(page, limit)?;

    let page = state.teapots_query.list(filter, request).await?;
    Ok(web::Json(Paginated::from_page(
        page.map(TeapotBody::from),
        &request,
    )))
}

/// Create a teapot.
#[utoipa::path(
    post,
    path = "/teapots",
    request_body = TeapotRequestBody,
    responses(
        (status = 201, description = "Teapot created", body = TeapotBody),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["teapots"],
    operation_id = "createTeapot"
)]
#[post("/teapots")]
pub async fn create_teapot(
    state: web::Data<HttpState>,
    payload: web::Json<TeapotRequestBody>,
) -> ApiResult<HttpResponse> {
    let teapot = state.teapots.create(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(TeapotBody::from(teapot)))
}

/// Fetch one teapot.
#[utoipa::path(
    get,
    path = "/teapots/{id}",
    params(("id" = uuid::Uuid, Path, description = "Teapot identifier")),
    responses(
        (status = 200, description = "Teapot", body = TeapotBody),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Teapot not found", body = ErrorSchema)
    ),
    tags = ["teapots"],
    operation_id = "getTeapot"
)]
#[get("/teapots/{id}")]
pub async fn get_teapot(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<TeapotBody>> {
    let id = parse_path_id(&path, Resource::Teapot)?;
    let teapot = state.teapots_query.get(id).await?;
    Ok(web::Json(teapot.into()))
}

/// Replace every attribute of a teapot.
#[utoipa::path(
    put,
    path = "/teapots/{id}",
    params(("id" = uuid::Uuid, Path, description = "Teapot identifier")),
    request_body = TeapotRequestBody,
    responses(
        (status = 200, description = "Teapot replaced", body = TeapotBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Teapot not found", body = ErrorSchema)
    ),
    tags = ["teapots"],
    operation_id = "updateTeapot"
)]
#[put("/teapots/{id}")]
pub async fn update_teapot(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Bytes,
) -> ApiResult<web::Json<TeapotBody>> {
    let id = parse_path_id(&path, Resource::Teapot)?;
    state.teapots_query.get(id).await?;
    let body: TeapotRequestBody = decode_body(&payload)?;
    let teapot = state.teapots.replace(id, body.into()).await?;
    Ok(web::Json(teapot.into()))
}

/// Update the supplied attributes of a teapot.
#[utoipa::path(
    patch,
    path = "/teapots/{id}",
    params(("id" = uuid::Uuid, Path, description = "Teapot identifier")),
    request_body = TeapotPatchBody,
    responses(
        (status = 200, description = "Teapot updated", body = TeapotBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Teapot not found", body = ErrorSchema)
    ),
    tags = ["teapots"],
    operation_id = "patchTeapot"
)]
#[patch("/teapots/{id}")]
pub async fn patch_teapot(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Bytes,
) -> ApiResult<web::Json<TeapotBody>> {
    let id = parse_path_id(&path, Resource::Teapot)?;
    state.teapots_query.get(id).await?;
    let body: TeapotPatchBody = decode_body(&payload)?;
    let teapot = state.teapots.patch(id, body.into()).await?;
    Ok(web::Json(teapot.into()))
}

/// Delete a teapot.
///
/// Brews that reference the teapot are left in place.
#[utoipa::path(
    delete,
    path = "/teapots/{id}",
    params(("id" = uuid::Uuid, Path, description = "Teapot identifier")),
    responses(
        (status = 204, description = "Teapot deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Teapot not found", body = ErrorSchema)
    ),
    tags = ["teapots"],
    operation_id = "deleteTeapot"
)]
#[delete("/teapots/{id}")]
pub async fn delete_teapot(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(&path, Resource::Teapot)?;
    state.teapots.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "teapots_tests.rs"]
mod tests;
