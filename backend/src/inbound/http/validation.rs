//! Shared validation helpers for inbound HTTP adapters.

use actix_web::{HttpRequest, web};
use pagination::{PageRequest, PageRequestError};
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;

use crate::domain::{Error, FieldError, parse_uuid};

/// Resource named in path identifier errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resource {
    Teapot,
    Tea,
    Brew,
}

impl Resource {
    fn as_str(self) -> &'static str {
        match self {
            Self::Teapot => "teapot",
            Self::Tea => "tea",
            Self::Brew => "brew",
        }
    }
}

/// Parse the `{id}` path segment of a resource route.
pub(crate) fn parse_path_id(raw: &str, resource: Resource) -> Result<Uuid, Error> {
    Uuid::parse_str(raw).map_err(|_| {
        Error::invalid_request(format!("Invalid {} ID format", resource.as_str())).with_details(
            json!({
                "field": "id",
                "code": "invalid_uuid",
                "value": raw,
            }),
        )
    })
}

/// Validation failure for input that could not be decoded at all.
pub(crate) fn malformed(field: &'static str, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({ "field": field, "code": "malformed" }))
}

/// Decode a JSON request body.
///
/// Routes addressing an existing record read the body as bytes and decode it
/// only after the record has been found, so a missing record wins over a
/// malformed body.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body)
        .map_err(|err| malformed("body", format!("Invalid request body: {err}")))
}

/// Decode the query string of `req`.
pub(crate) fn decode_query<T: DeserializeOwned>(req: &HttpRequest) -> Result<T, Error> {
    web::Query::<T>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .map_err(|err| malformed("query", format!("Invalid query parameters: {err}")))
}

/// Build a page request from raw `page`/`limit` query values.
pub(crate) fn page_request(page: Option<i64>, limit: Option<i64>) -> Result<PageRequest, Error> {
    PageRequest::from_query(page, limit).map_err(page_error)
}

fn page_error(err: PageRequestError) -> Error {
    let value = match err {
        PageRequestError::PageOutOfRange { page } => page,
        PageRequestError::LimitOutOfRange { limit } => limit,
    };
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": err.field(),
        "code": "out_of_range",
        "value": value,
    }))
}

/// Parse an optional enumeration filter from the query string.
pub(crate) fn parse_filter<T>(
    raw: Option<String>,
    parse: impl FnOnce(&str) -> Result<T, FieldError>,
) -> Result<Option<T>, Error> {
    raw.map(|value| parse(&value))
        .transpose()
        .map_err(Error::from)
}

/// Parse an optional identifier filter from the query string.
pub(crate) fn parse_id_filter(
    raw: Option<String>,
    field: &'static str,
) -> Result<Option<Uuid>, Error> {
    parse_filter(raw, |value| parse_uuid(value, field))
}
