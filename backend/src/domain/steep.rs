//! Individual steeps within a brew.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::validation::{FieldError, at_least, bounded, check_optional_length, required};

/// Inclusive rating bounds.
pub const RATING: (i64, i64) = (1, 5);
/// Maximum notes length in characters.
pub const NOTES_MAX: usize = 200;

/// A stored steep.
///
/// `steep_number` is one-based and assigned by the repository when the steep
/// is appended to its brew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Steep {
    pub id: Uuid,
    pub brew_id: Uuid,
    pub steep_number: u32,
    pub duration_seconds: u32,
    pub rating: Option<u8>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Steep {
    /// Build an unnumbered steep for `brew_id`.
    pub fn new(id: Uuid, brew_id: Uuid, draft: SteepDraft, now: DateTime<Utc>) -> Self {
        let SteepDraft {
            duration_seconds,
            rating,
            notes,
        } = draft;
        Self {
            id,
            brew_id,
            steep_number: 0,
            duration_seconds,
            rating,
            notes,
            created_at: now,
        }
    }
}

/// Unvalidated steep payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SteepInput {
    pub duration_seconds: Option<i64>,
    pub rating: Option<i64>,
    pub notes: Option<String>,
}

/// Validated steep payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteepDraft {
    pub duration_seconds: u32,
    pub rating: Option<u8>,
    pub notes: Option<String>,
}

impl SteepDraft {
    /// Validate a steep payload.
    pub fn parse(input: SteepInput) -> Result<Self, FieldError> {
        let SteepInput {
            duration_seconds,
            rating,
            notes,
        } = input;

        let duration_seconds = at_least(
            required(duration_seconds, "durationSeconds")?,
            "durationSeconds",
            1,
        )?;
        let rating = rating
            .map(|value| {
                let (min, max) = RATING;
                bounded(value, "rating", min, max)
            })
            .transpose()?;
        check_optional_length(notes.as_deref(), "notes", NOTES_MAX)?;

        Ok(Self {
            duration_seconds,
            rating,
            notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SteepInput { duration_seconds: Some(30), rating: Some(5), notes: None }, true)]
    #[case(SteepInput { duration_seconds: Some(0), rating: None, notes: None }, false)]
    #[case(SteepInput { duration_seconds: None, rating: None, notes: None }, false)]
    #[case(SteepInput { duration_seconds: Some(30), rating: Some(6), notes: None }, false)]
    #[case(SteepInput { duration_seconds: Some(30), rating: None, notes: Some("x".repeat(201)) }, false)]
    fn steep_payload_validation(#[case] input: SteepInput, #[case] ok: bool) {
        assert_eq!(SteepDraft::parse(input).is_ok(), ok);
    }

    #[rstest]
    fn new_steep_is_unnumbered() {
        let draft = SteepDraft::parse(SteepInput {
            duration_seconds: Some(45),
            ..SteepInput::default()
        })
        .expect("valid steep");
        let steep = Steep::new(Uuid::new_v4(), Uuid::new_v4(), draft, Utc::now());
        assert_eq!(steep.steep_number, 0);
        assert_eq!(steep.duration_seconds, 45);
    }
}
