use serde::{Deserialize, Serialize};

use crate::calendar::{self, CalendarDate, TokenId};

use super::error::{Result, TokenError};

/// The material a date token is cast in, stored on the ledger as a color code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Paper,
    Wood,
    Bronze,
    Silver,
    Gold,
    Diamond,
}

impl Material {
    pub const ALL: [Material; 6] = [
        Material::Paper,
        Material::Wood,
        Material::Bronze,
        Material::Silver,
        Material::Gold,
        Material::Diamond,
    ];

    /// The color code used for this material on the ledger.
    pub fn code(self) -> u8 {
        match self {
            Material::Paper => 0,
            Material::Wood => 1,
            Material::Bronze => 2,
            Material::Silver => 3,
            Material::Gold => 4,
            Material::Diamond => 5,
        }
    }

    /// Display label, as used in the "Material" trait.
    pub fn name(self) -> &'static str {
        match self {
            Material::Paper => "Paper",
            Material::Wood => "Wood",
            Material::Bronze => "Bronze",
            Material::Silver => "Silver",
            Material::Gold => "Gold",
            Material::Diamond => "Diamond",
        }
    }
}

impl TryFrom<u8> for Material {
    type Error = TokenError;

    fn try_from(code: u8) -> Result<Self> {
        Material::ALL
            .into_iter()
            .find(|material| material.code() == code)
            .ok_or(TokenError::UnknownColor(code))
    }
}

/// Label of the material behind a color code.
pub fn material_name(color: u8) -> Result<&'static str> {
    Material::try_from(color).map(Material::name)
}

/// The raw attributes a ledger stores for one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAttributes {
    pub date: CalendarDate,
    /// Material color code, see [`Material`].
    pub color: u8,
    pub title: String,
}

impl TokenAttributes {
    /// Builds the record from the positional values a ledger hands back,
    /// checking the date fields once at the boundary.
    pub fn new(
        year: u64,
        month: u8,
        day: u8,
        color: u8,
        title: impl Into<String>,
    ) -> calendar::Result<Self> {
        Ok(Self {
            date: CalendarDate::new(year, month, day)?,
            color,
            title: title.into(),
        })
    }
}

/// One entry of the metadata `attributes` list.
///
/// Serializes either as `{trait_type, value}` or, for typed values such as
/// dates, as `{display_type, trait_type, value}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attribute {
    Display {
        display_type: String,
        trait_type: String,
        value: i64,
    },
    Trait {
        trait_type: String,
        value: String,
    },
}

impl Attribute {
    pub fn text(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute::Trait {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }

    pub fn yes_no(trait_type: impl Into<String>, flag: bool) -> Self {
        Self::text(trait_type, if flag { "yes" } else { "no" })
    }

    /// A date trait; `timestamp` is in seconds since the Unix epoch.
    pub fn date(trait_type: impl Into<String>, timestamp: i64) -> Self {
        Attribute::Display {
            display_type: "date".to_string(),
            trait_type: trait_type.into(),
            value: timestamp,
        }
    }

    pub fn trait_type(&self) -> &str {
        match self {
            Attribute::Display { trait_type, .. } | Attribute::Trait { trait_type, .. } => {
                trait_type
            }
        }
    }
}

/// The descriptive record served for a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    /// Absolute URL of the token image.
    pub image: String,
    pub attributes: Vec<Attribute>,
}

/// One row of the bulk token listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSummary {
    pub token_id: TokenId,
    pub year: u64,
    pub month: u8,
    pub day: u8,
    pub color: u8,
    pub title: String,
    pub owner: String,
}

impl TokenSummary {
    pub fn new(token_id: TokenId, attributes: TokenAttributes, owner: impl Into<String>) -> Self {
        let TokenAttributes { date, color, title } = attributes;
        Self {
            token_id,
            year: date.year,
            month: date.month,
            day: date.day,
            color,
            title,
            owner: owner.into(),
        }
    }

    pub fn date(&self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }
}
