//! Turns the raw attributes stored on the ledger into the metadata record
//! served to catalog consumers.
//!
//! Resolution is a pure function of its inputs, so the result can be cached
//! for as long as the ledger attributes stay the same.

use crate::calendar::{date_to_timestamp, is_leap_year, TokenId};

use super::error::Result;
use super::types::{material_name, Attribute, TokenAttributes, TokenMetadata};

/// Description shared by every token.
pub const TOKEN_DESCRIPTION: &str = "DATE tokens are non-fungible tokens, one for every calendar day.\n\n\
Each DATE token is unique: there is exactly one for each day since Monday, January 1st of Year 1.\n\n\
Its owner can give it a title and trade it like any other NFT.";

/// Builds the image URL for a token.
///
/// The URL carries everything the image endpoint needs, so rendering the
/// image never touches the ledger.
pub fn image_url(base_uri: &str, id: TokenId, attributes: &TokenAttributes) -> String {
    let date = &attributes.date;
    format!(
        "{}/token/svg/{}/{}/{}/{}/{}",
        base_uri.trim_end_matches('/'),
        id,
        date.year,
        date.month,
        date.day,
        attributes.color
    )
}

/// Resolves the metadata of a token.
///
/// Attributes are listed in a fixed order: Material, Is Leap Year, Is Leap
/// Day and Date. The Date value is the Unix timestamp of the first second of
/// the day.
pub fn resolve(id: TokenId, attributes: &TokenAttributes, base_uri: &str) -> Result<TokenMetadata> {
    let date = &attributes.date;
    let material = material_name(attributes.color)?;
    let timestamp = date_to_timestamp(date)?;

    Ok(TokenMetadata {
        name: attributes.title.clone(),
        description: TOKEN_DESCRIPTION.to_string(),
        image: image_url(base_uri, id, attributes),
        attributes: vec![
            Attribute::text("Material", material),
            Attribute::yes_no("Is Leap Year", is_leap_year(date.year)),
            Attribute::yes_no("Is Leap Day", date.is_leap_day()),
            Attribute::date("Date", timestamp),
        ],
    })
}
