//! Field-level constraints shared by the entity drafts and patches.
//!
//! Every violation names the offending field so adapters can point clients at
//! it. Conversion into [`Error`] attaches `{ field, code }` details.

use serde_json::json;
use thiserror::Error as ThisError;

use super::Error;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum FieldError {
    /// A required field was not supplied.
    #[error("missing required field: {field}")]
    Missing { field: &'static str },
    /// A text field is shorter or longer than allowed.
    #[error("{field} must be between {min} and {max} characters")]
    Length {
        field: &'static str,
        min: usize,
        max: usize,
    },
    /// A number lies outside its inclusive bounds.
    #[error("{field} must be between {min} and {max}")]
    Range {
        field: &'static str,
        min: i64,
        max: i64,
    },
    /// A number is below its minimum and has no upper bound.
    #[error("{field} must be at least {min}")]
    Minimum { field: &'static str, min: i64 },
    /// A value is not a member of the field's enumeration.
    #[error("{field} must be one of: {allowed}")]
    NotInSet {
        field: &'static str,
        allowed: String,
        value: String,
    },
    /// A value could not be parsed as a UUID.
    #[error("{field} must be a valid UUID")]
    InvalidUuid { field: &'static str, value: String },
    /// A value could not be parsed as an RFC 3339 timestamp.
    #[error("{field} must be an RFC 3339 timestamp")]
    InvalidTimestamp { field: &'static str, value: String },
}

impl FieldError {
    /// Name of the offending field as it appears on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::Length { field, .. }
            | Self::Range { field, .. }
            | Self::Minimum { field, .. }
            | Self::NotInSet { field, .. }
            | Self::InvalidUuid { field, .. }
            | Self::InvalidTimestamp { field, .. } => *field,
        }
    }

    /// Machine-readable violation code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "missing_field",
            Self::Length { .. } => "invalid_length",
            Self::Range { .. } | Self::Minimum { .. } => "out_of_range",
            Self::NotInSet { .. } => "invalid_enum",
            Self::InvalidUuid { .. } => "invalid_uuid",
            Self::InvalidTimestamp { .. } => "invalid_timestamp",
        }
    }

    fn value(&self) -> Option<&str> {
        match self {
            Self::NotInSet { value, .. }
            | Self::InvalidUuid { value, .. }
            | Self::InvalidTimestamp { value, .. } => Some(value.as_str()),
            _ => None,
        }
    }
}

impl From<FieldError> for Error {
    fn from(value: FieldError) -> Self {
        let details = match value.value() {
            Some(raw) => json!({ "field": value.field(), "code": value.code(), "value": raw }),
            None => json!({ "field": value.field(), "code": value.code() }),
        };
        Error::invalid_request(value.to_string()).with_details(details)
    }
}

/// Unwrap a required field.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, FieldError> {
    value.ok_or(FieldError::Missing { field })
}

/// Check that `value` has between `min` and `max` characters.
pub fn check_length(
    value: &str,
    field: &'static str,
    min: usize,
    max: usize,
) -> Result<(), FieldError> {
    let count = value.chars().count();
    if count < min || count > max {
        return Err(FieldError::Length { field, min, max });
    }
    Ok(())
}

/// Check an optional text field against a maximum length.
pub fn check_optional_length(
    value: Option<&str>,
    field: &'static str,
    max: usize,
) -> Result<(), FieldError> {
    value.map_or(Ok(()), |text| check_length(text, field, 0, max))
}

/// Check that `value` lies in `min..=max` and narrow it to `T`.
pub fn bounded<T>(value: i64, field: &'static str, min: i64, max: i64) -> Result<T, FieldError>
where
    T: TryFrom<i64>,
{
    let out_of_range = FieldError::Range { field, min, max };
    if value < min || value > max {
        return Err(out_of_range);
    }
    T::try_from(value).map_err(|_| out_of_range)
}

/// Integer targets whose largest value is known as an `i64`.
pub trait Ceiling: TryFrom<i64> {
    /// Largest value the type can hold.
    const CEILING: i64;
}

impl Ceiling for u32 {
    const CEILING: i64 = u32::MAX as i64;
}

/// Check that `value` is at least `min` and narrow it to `T`.
///
/// Values the target type cannot hold are reported as a range violation
/// naming the type's ceiling.
pub fn at_least<T>(value: i64, field: &'static str, min: i64) -> Result<T, FieldError>
where
    T: Ceiling,
{
    if value < min {
        return Err(FieldError::Minimum { field, min });
    }
    T::try_from(value).map_err(|_| FieldError::Range {
        field,
        min,
        max: T::CEILING,
    })
}
