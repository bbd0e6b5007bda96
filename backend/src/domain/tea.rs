//! Tea aggregate and its validated inputs.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::patch::Patch;
use super::validation::{FieldError, bounded, check_length, check_optional_length, required};
use super::wire_enum::wire_enum;

/// Inclusive name length bounds in characters.
pub const NAME_LENGTH: (usize, usize) = (1, 100);
/// Maximum origin length in characters.
pub const ORIGIN_MAX: usize = 100;
/// Maximum description length in characters.
pub const DESCRIPTION_MAX: usize = 1000;
/// Inclusive steeping temperature bounds in degrees Celsius.
pub const STEEP_TEMP_CELSIUS: (i64, i64) = (60, 100);
/// Inclusive steeping time bounds in seconds.
pub const STEEP_TIME_SECONDS: (i64, i64) = (1, 600);

wire_enum! {
    /// Processing family of a tea.
    pub enum TeaType {
        Green => "green",
        Black => "black",
        Oolong => "oolong",
        White => "white",
        Puerh => "puerh",
        Herbal => "herbal",
        Rooibos => "rooibos",
    }
}

wire_enum! {
    /// Relative caffeine content.
    pub enum CaffeineLevel {
        None => "none",
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

impl Default for CaffeineLevel {
    fn default() -> Self {
        Self::Medium
    }
}

/// A stored tea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tea {
    pub id: Uuid,
    pub name: String,
    pub tea_type: TeaType,
    pub origin: Option<String>,
    pub caffeine_level: CaffeineLevel,
    /// Recommended water temperature; brews default to it.
    pub steep_temp_celsius: u8,
    pub steep_time_seconds: u32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tea {
    /// Materialise a new tea from validated attributes.
    pub fn create(id: Uuid, draft: TeaDraft, now: DateTime<Utc>) -> Self {
        let TeaDraft {
            name,
            tea_type,
            origin,
            caffeine_level,
            steep_temp_celsius,
            steep_time_seconds,
            description,
        } = draft;
        Self {
            id,
            name,
            tea_type,
            origin,
            caffeine_level,
            steep_temp_celsius,
            steep_time_seconds,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every attribute, keeping identity and creation time.
    pub fn replace(&mut self, draft: TeaDraft, now: DateTime<Utc>) {
        let created_at = self.created_at;
        *self = Self {
            created_at,
            ..Self::create(self.id, draft, now)
        };
    }

    /// Apply the supplied fields of a partial update.
    pub fn apply(&mut self, patch: TeaPatch, now: DateTime<Utc>) {
        patch.name.apply_to(&mut self.name);
        patch.tea_type.apply_to(&mut self.tea_type);
        patch.origin.apply_to_option(&mut self.origin);
        patch.caffeine_level.apply_to(&mut self.caffeine_level);
        patch.steep_temp_celsius.apply_to(&mut self.steep_temp_celsius);
        patch.steep_time_seconds.apply_to(&mut self.steep_time_seconds);
        patch.description.apply_to_option(&mut self.description);
        self.updated_at = now;
    }
}

/// Unvalidated tea attributes as supplied by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeaInput {
    pub name: Option<String>,
    pub tea_type: Option<String>,
    pub origin: Option<String>,
    pub caffeine_level: Option<String>,
    pub steep_temp_celsius: Option<i64>,
    pub steep_time_seconds: Option<i64>,
    pub description: Option<String>,
}

/// Validated attributes for creating or replacing a tea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeaDraft {
    pub name: String,
    pub tea_type: TeaType,
    pub origin: Option<String>,
    pub caffeine_level: CaffeineLevel,
    pub steep_temp_celsius: u8,
    pub steep_time_seconds: u32,
    pub description: Option<String>,
}

impl TeaDraft {
    /// Validate a creation payload; an absent caffeine level takes the
    /// default.
    pub fn for_create(input: TeaInput) -> Result<Self, FieldError> {
        Self::parse(input, false)
    }

    /// Validate a full-replace payload.
    pub fn for_replace(input: TeaInput) -> Result<Self, FieldError> {
        Self::parse(input, true)
    }

    fn parse(input: TeaInput, caffeine_required: bool) -> Result<Self, FieldError> {
        let TeaInput {
            name,
            tea_type,
            origin,
            caffeine_level,
            steep_temp_celsius,
            steep_time_seconds,
            description,
        } = input;

        let name = parse_name(required(name, "name")?)?;
        let tea_type = TeaType::parse_field(&required(tea_type, "type")?, "type")?;
        check_optional_length(origin.as_deref(), "origin", ORIGIN_MAX)?;
        let caffeine_level = match caffeine_level {
            Some(raw) => CaffeineLevel::parse_field(&raw, "caffeineLevel")?,
            None if caffeine_required => {
                return Err(FieldError::Missing {
                    field: "caffeineLevel",
                });
            }
            None => CaffeineLevel::default(),
        };
        let steep_temp_celsius =
            parse_steep_temp(required(steep_temp_celsius, "steepTempCelsius")?)?;
        let steep_time_seconds =
            parse_steep_time(required(steep_time_seconds, "steepTimeSeconds")?)?;
        check_optional_length(description.as_deref(), "description", DESCRIPTION_MAX)?;

        Ok(Self {
            name,
            tea_type,
            origin,
            caffeine_level,
            steep_temp_celsius,
            steep_time_seconds,
            description,
        })
    }
}

/// Validated partial update of a tea.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeaPatch {
    pub name: Patch<String>,
    pub tea_type: Patch<TeaType>,
    pub origin: Patch<String>,
    pub caffeine_level: Patch<CaffeineLevel>,
    pub steep_temp_celsius: Patch<u8>,
    pub steep_time_seconds: Patch<u32>,
    pub description: Patch<String>,
}

impl TeaPatch {
    /// Validate every supplied field; absent fields stay unchanged.
    pub fn parse(input: TeaInput) -> Result<Self, FieldError> {
        let TeaInput {
            name,
            tea_type,
            origin,
            caffeine_level,
            steep_temp_celsius,
            steep_time_seconds,
            description,
        } = input;

        Ok(Self {
            name: Patch::from(name).try_map(parse_name)?,
            tea_type: Patch::from(tea_type).try_map(|raw| TeaType::parse_field(&raw, "type"))?,
            origin: Patch::from(origin)
                .try_map(|text| check_length(&text, "origin", 0, ORIGIN_MAX).map(|()| text))?,
            caffeine_level: Patch::from(caffeine_level)
                .try_map(|raw| CaffeineLevel::parse_field(&raw, "caffeineLevel"))?,
            steep_temp_celsius: Patch::from(steep_temp_celsius).try_map(parse_steep_temp)?,
            steep_time_seconds: Patch::from(steep_time_seconds).try_map(parse_steep_time)?,
            description: Patch::from(description).try_map(|text| {
                check_length(&text, "description", 0, DESCRIPTION_MAX).map(|()| text)
            })?,
        })
    }
}

/// Equality filters for listing teas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeaFilter {
    pub tea_type: Option<TeaType>,
    pub caffeine_level: Option<CaffeineLevel>,
}

impl TeaFilter {
    /// Whether `tea` satisfies every set filter.
    pub fn matches(&self, tea: &Tea) -> bool {
        self.tea_type.is_none_or(|tea_type| tea.tea_type == tea_type)
            && self
                .caffeine_level
                .is_none_or(|level| tea.caffeine_level == level)
    }
}

fn parse_name(name: String) -> Result<String, FieldError> {
    let (min, max) = NAME_LENGTH;
    check_length(&name, "name", min, max)?;
    Ok(name)
}

fn parse_steep_temp(value: i64) -> Result<u8, FieldError> {
    let (min, max) = STEEP_TEMP_CELSIUS;
    bounded(value, "steepTempCelsius", min, max)
}

fn parse_steep_time(value: i64) -> Result<u32, FieldError> {
    let (min, max) = STEEP_TIME_SECONDS;
    bounded(value, "steepTimeSeconds", min, max)
}
