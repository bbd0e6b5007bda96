//! Brew aggregate: one tea steeped in one teapot.
//!
//! Brews hold their teapot and tea references by id. The references are
//! checked once when the brew is created and never again, so deleting a
//! teapot or tea leaves existing brews pointing at nothing.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::patch::Patch;
use super::validation::{FieldError, bounded, check_length, check_optional_length, required};
use super::wire_enum::wire_enum;

/// Inclusive water temperature bounds in degrees Celsius.
pub const WATER_TEMP_CELSIUS: (i64, i64) = (60, 100);
/// Maximum notes length in characters.
pub const NOTES_MAX: usize = 500;

wire_enum! {
    /// Progress of a brew.
    pub enum BrewStatus {
        Preparing => "preparing",
        Steeping => "steeping",
        Ready => "ready",
        Served => "served",
        Cold => "cold",
    }
}

impl Default for BrewStatus {
    fn default() -> Self {
        Self::Preparing
    }
}

/// A stored brew.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brew {
    pub id: Uuid,
    pub teapot_id: Uuid,
    pub tea_id: Uuid,
    pub status: BrewStatus,
    pub water_temp_celsius: u8,
    pub notes: Option<String>,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Brew {
    /// Start a new brew.
    ///
    /// `default_water_temp` is used when the draft does not name a
    /// temperature; callers pass the referenced tea's steeping temperature.
    pub fn start(id: Uuid, draft: BrewDraft, default_water_temp: u8, now: DateTime<Utc>) -> Self {
        let BrewDraft {
            teapot_id,
            tea_id,
            water_temp_celsius,
            notes,
        } = draft;
        Self {
            id,
            teapot_id,
            tea_id,
            status: BrewStatus::default(),
            water_temp_celsius: water_temp_celsius.unwrap_or(default_water_temp),
            notes,
            started_at: now,
            completed_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the supplied fields of a partial update.
    pub fn apply(&mut self, patch: BrewPatch, now: DateTime<Utc>) {
        patch.status.apply_to(&mut self.status);
        patch.notes.apply_to_option(&mut self.notes);
        patch.completed_at.apply_to_option(&mut self.completed_at);
        self.updated_at = now;
    }
}

/// Unvalidated brew creation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrewInput {
    pub teapot_id: Option<String>,
    pub tea_id: Option<String>,
    pub water_temp_celsius: Option<i64>,
    pub notes: Option<String>,
}

/// Validated brew creation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrewDraft {
    pub teapot_id: Uuid,
    pub tea_id: Uuid,
    pub water_temp_celsius: Option<u8>,
    pub notes: Option<String>,
}

impl BrewDraft {
    /// Validate identifiers and ranges; referenced entities are checked by
    /// the service.
    pub fn parse(input: BrewInput) -> Result<Self, FieldError> {
        let BrewInput {
            teapot_id,
            tea_id,
            water_temp_celsius,
            notes,
        } = input;

        let teapot_id = parse_uuid(&required(teapot_id, "teapotId")?, "teapotId")?;
        let tea_id = parse_uuid(&required(tea_id, "teaId")?, "teaId")?;
        let water_temp_celsius = water_temp_celsius
            .map(|value| {
                let (min, max) = WATER_TEMP_CELSIUS;
                bounded(value, "waterTempCelsius", min, max)
            })
            .transpose()?;
        check_optional_length(notes.as_deref(), "notes", NOTES_MAX)?;

        Ok(Self {
            teapot_id,
            tea_id,
            water_temp_celsius,
            notes,
        })
    }
}

/// Unvalidated brew patch payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrewPatchInput {
    pub status: Option<String>,
    pub notes: Option<String>,
    pub completed_at: Option<String>,
}

/// Validated partial update of a brew.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrewPatch {
    pub status: Patch<BrewStatus>,
    pub notes: Patch<String>,
    pub completed_at: Patch<DateTime<Utc>>,
}

impl BrewPatch {
    /// Validate every supplied field; absent fields stay unchanged.
    pub fn parse(input: BrewPatchInput) -> Result<Self, FieldError> {
        let BrewPatchInput {
            status,
            notes,
            completed_at,
        } = input;

        Ok(Self {
            status: Patch::from(status).try_map(|raw| BrewStatus::parse_field(&raw, "status"))?,
            notes: Patch::from(notes)
                .try_map(|text| check_length(&text, "notes", 0, NOTES_MAX).map(|()| text))?,
            completed_at: Patch::from(completed_at)
                .try_map(|raw| parse_timestamp(&raw, "completedAt"))?,
        })
    }
}

/// Equality filters for listing brews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrewFilter {
    pub status: Option<BrewStatus>,
    pub teapot_id: Option<Uuid>,
    pub tea_id: Option<Uuid>,
}

impl BrewFilter {
    /// Filter matching every brew made in `teapot_id`.
    pub fn for_teapot(teapot_id: Uuid) -> Self {
        Self {
            teapot_id: Some(teapot_id),
            ..Self::default()
        }
    }

    /// Whether `brew` satisfies every set filter.
    pub fn matches(&self, brew: &Brew) -> bool {
        self.status.is_none_or(|status| brew.status == status)
            && self.teapot_id.is_none_or(|id| brew.teapot_id == id)
            && self.tea_id.is_none_or(|id| brew.tea_id == id)
    }
}

/// Parse a hyphenated UUID, naming `field` on failure.
pub fn parse_uuid(raw: &str, field: &'static str) -> Result<Uuid, FieldError> {
    Uuid::parse_str(raw).map_err(|_| FieldError::InvalidUuid {
        field,
        value: raw.to_owned(),
    })
}

/// Parse an RFC 3339 timestamp into UTC, naming `field` on failure.
pub fn parse_timestamp(raw: &str, field: &'static str) -> Result<DateTime<Utc>, FieldError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|_| FieldError::InvalidTimestamp {
            field,
            value: raw.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    //! Brew validation and lifecycle coverage.

    use super::*;
    use rstest::rstest;

    fn draft_input() -> BrewInput {
        BrewInput {
            teapot_id: Some(Uuid::new_v4().to_string()),
            tea_id: Some(Uuid::new_v4().to_string()),
            ..BrewInput::default()
        }
    }

    #[rstest]
    fn start_defaults_water_temperature_and_status() {
        let draft = BrewDraft::parse(draft_input()).expect("valid brew");
        let now = Utc::now();
        let brew = Brew::start(Uuid::new_v4(), draft, 80, now);
        assert_eq!(brew.water_temp_celsius, 80);
        assert_eq!(brew.status, BrewStatus::Preparing);
        assert_eq!(brew.started_at, now);
        assert!(brew.completed_at.is_none());
    }

    #[rstest]
    fn explicit_water_temperature_wins() {
        let draft = BrewDraft::parse(BrewInput {
            water_temp_celsius: Some(95),
            ..draft_input()
        })
        .expect("valid brew");
        let brew = Brew::start(Uuid::new_v4(), draft, 80, Utc::now());
        assert_eq!(brew.water_temp_celsius, 95);
    }

    #[rstest]
    #[case(BrewInput { teapot_id: Some("not-a-uuid".to_owned()), ..draft_input() }, "teapotId")]
    #[case(BrewInput { tea_id: None, ..draft_input() }, "teaId")]
    #[case(BrewInput { water_temp_celsius: Some(30), ..draft_input() }, "waterTempCelsius")]
    #[case(BrewInput { notes: Some("x".repeat(501)), ..draft_input() }, "notes")]
    fn invalid_drafts_name_the_field(#[case] input: BrewInput, #[case] field: &str) {
        let err = BrewDraft::parse(input).expect_err("invalid brew");
        assert_eq!(err.field(), field);
    }

    #[rstest]
    fn patch_parses_completion_time() {
        let patch = BrewPatch::parse(BrewPatchInput {
            status: Some("served".to_owned()),
            completed_at: Some("2024-05-01T10:00:00+02:00".to_owned()),
            ..BrewPatchInput::default()
        })
        .expect("valid patch");
        assert_eq!(patch.status, Patch::Set(BrewStatus::Served));
        let Patch::Set(completed) = patch.completed_at else {
            panic!("completion time should be set");
        };
        assert_eq!(completed.to_rfc3339(), "2024-05-01T08:00:00+00:00");
    }

    #[rstest]
    fn patch_rejects_unknown_status() {
        let err = BrewPatch::parse(BrewPatchInput {
            status: Some("boiling".to_owned()),
            ..BrewPatchInput::default()
        })
        .expect_err("unknown status");
        assert_eq!(err.code(), "invalid_enum");
    }

    #[rstest]
    fn filter_by_teapot() {
        let draft = BrewDraft::parse(draft_input()).expect("valid brew");
        let brew = Brew::start(Uuid::new_v4(), draft, 80, Utc::now());
        assert!(BrewFilter::for_teapot(brew.teapot_id).matches(&brew));
        assert!(!BrewFilter::for_teapot(Uuid::new_v4()).matches(&brew));
    }
}
