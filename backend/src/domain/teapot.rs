//! Teapot aggregate and its validated inputs.
//!
//! Raw client input arrives as [`TeapotInput`]; the parsing constructors
//! enforce required fields, lengths, ranges and enumeration membership before
//! anything reaches a repository.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::patch::Patch;
use super::validation::{FieldError, bounded, check_length, check_optional_length, required};
use super::wire_enum::wire_enum;

/// Inclusive name length bounds in characters.
pub const NAME_LENGTH: (usize, usize) = (1, 100);
/// Maximum description length in characters.
pub const DESCRIPTION_MAX: usize = 500;
/// Inclusive capacity bounds in millilitres.
pub const CAPACITY_ML: (i64, i64) = (1, 5000);

wire_enum! {
    /// Material a teapot is made from.
    pub enum TeapotMaterial {
        Ceramic => "ceramic",
        CastIron => "cast-iron",
        Glass => "glass",
        Porcelain => "porcelain",
        Clay => "clay",
        StainlessSteel => "stainless-steel",
    }
}

wire_enum! {
    /// Brewing tradition a teapot belongs to.
    pub enum TeapotStyle {
        Kyusu => "kyusu",
        Gaiwan => "gaiwan",
        English => "english",
        Moroccan => "moroccan",
        Turkish => "turkish",
        Yixing => "yixing",
    }
}

impl Default for TeapotStyle {
    fn default() -> Self {
        Self::English
    }
}

/// A stored teapot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teapot {
    pub id: Uuid,
    pub name: String,
    pub material: TeapotMaterial,
    pub capacity_ml: u32,
    pub style: TeapotStyle,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Teapot {
    /// Materialise a new teapot from validated attributes.
    pub fn create(id: Uuid, draft: TeapotDraft, now: DateTime<Utc>) -> Self {
        let TeapotDraft {
            name,
            material,
            capacity_ml,
            style,
            description,
        } = draft;
        Self {
            id,
            name,
            material,
            capacity_ml,
            style,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite every attribute, keeping identity and creation time.
    pub fn replace(&mut self, draft: TeapotDraft, now: DateTime<Utc>) {
        let TeapotDraft {
            name,
            material,
            capacity_ml,
            style,
            description,
        } = draft;
        self.name = name;
        self.material = material;
        self.capacity_ml = capacity_ml;
        self.style = style;
        self.description = description;
        self.updated_at = now;
    }

    /// Apply the supplied fields of a partial update.
    pub fn apply(&mut self, patch: TeapotPatch, now: DateTime<Utc>) {
        patch.name.apply_to(&mut self.name);
        patch.material.apply_to(&mut self.material);
        patch.capacity_ml.apply_to(&mut self.capacity_ml);
        patch.style.apply_to(&mut self.style);
        patch.description.apply_to_option(&mut self.description);
        self.updated_at = now;
    }
}

/// Unvalidated teapot attributes as supplied by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeapotInput {
    pub name: Option<String>,
    pub material: Option<String>,
    pub capacity_ml: Option<i64>,
    pub style: Option<String>,
    pub description: Option<String>,
}

/// Validated attributes for creating or replacing a teapot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeapotDraft {
    pub name: String,
    pub material: TeapotMaterial,
    pub capacity_ml: u32,
    pub style: TeapotStyle,
    pub description: Option<String>,
}

impl TeapotDraft {
    /// Validate a creation payload; an absent style takes the default.
    ///
    /// # Examples
    /// ```
    /// use tea_api::domain::{TeapotDraft, TeapotInput, TeapotStyle};
    ///
    /// let draft = TeapotDraft::for_create(TeapotInput {
    ///     name: Some("Brown Betty".to_owned()),
    ///     material: Some("ceramic".to_owned()),
    ///     capacity_ml: Some(1200),
    ///     ..TeapotInput::default()
    /// })
    /// .expect("valid teapot");
    /// assert_eq!(draft.style, TeapotStyle::English);
    /// ```
    pub fn for_create(input: TeapotInput) -> Result<Self, FieldError> {
        Self::parse(input, false)
    }

    /// Validate a full-replace payload; every field except `description` is
    /// required.
    pub fn for_replace(input: TeapotInput) -> Result<Self, FieldError> {
        Self::parse(input, true)
    }

    fn parse(input: TeapotInput, style_required: bool) -> Result<Self, FieldError> {
        let TeapotInput {
            name,
            material,
            capacity_ml,
            style,
            description,
        } = input;

        let name = parse_name(required(name, "name")?)?;
        let material = TeapotMaterial::parse_field(&required(material, "material")?, "material")?;
        let capacity_ml = parse_capacity(required(capacity_ml, "capacityMl")?)?;
        let style = match style {
            Some(raw) => TeapotStyle::parse_field(&raw, "style")?,
            None if style_required => return Err(FieldError::Missing { field: "style" }),
            None => TeapotStyle::default(),
        };
        check_optional_length(description.as_deref(), "description", DESCRIPTION_MAX)?;

        Ok(Self {
            name,
            material,
            capacity_ml,
            style,
            description,
        })
    }
}

/// Validated partial update of a teapot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeapotPatch {
    pub name: Patch<String>,
    pub material: Patch<TeapotMaterial>,
    pub capacity_ml: Patch<u32>,
    pub style: Patch<TeapotStyle>,
    pub description: Patch<String>,
}

impl TeapotPatch {
    /// Validate every supplied field; absent fields stay unchanged.
    pub fn parse(input: TeapotInput) -> Result<Self, FieldError> {
        let TeapotInput {
            name,
            material,
            capacity_ml,
            style,
            description,
        } = input;

        let description = Patch::from(description).try_map(|text| {
            check_length(&text, "description", 0, DESCRIPTION_MAX).map(|()| text)
        })?;

        Ok(Self {
            name: Patch::from(name).try_map(parse_name)?,
            material: Patch::from(material)
                .try_map(|raw| TeapotMaterial::parse_field(&raw, "material"))?,
            capacity_ml: Patch::from(capacity_ml).try_map(parse_capacity)?,
            style: Patch::from(style).try_map(|raw| TeapotStyle::parse_field(&raw, "style"))?,
            description,
        })
    }
}

/// Equality filters for listing teapots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeapotFilter {
    pub material: Option<TeapotMaterial>,
    pub style: Option<TeapotStyle>,
}

impl TeapotFilter {
    /// Whether `teapot` satisfies every set filter.
    pub fn matches(&self, teapot: &Teapot) -> bool {
        self.material.is_none_or(|material| teapot.material == material)
            && self.style.is_none_or(|style| teapot.style == style)
    }
}

fn parse_name(name: String) -> Result<String, FieldError> {
    let (min, max) = NAME_LENGTH;
    check_length(&name, "name", min, max)?;
    Ok(name)
}

fn parse_capacity(value: i64) -> Result<u32, FieldError> {
    let (min, max) = CAPACITY_ML;
    bounded(value, "capacityMl", min, max)
}
