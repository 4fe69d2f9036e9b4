//! Pretty output formatting.

use datechain_core::token::{material_name, Attribute, TokenMetadata, TokenSummary};

use crate::dates::DateInfo;

/// Format token metadata for display.
pub fn format_metadata(metadata: &TokenMetadata) -> String {
    let mut output = format!("{}\n  Image: {}", metadata.name, metadata.image);
    for attribute in &metadata.attributes {
        match attribute {
            Attribute::Trait { trait_type, value } => {
                output.push_str(&format!("\n  {}: {}", trait_type, value));
            }
            Attribute::Display {
                display_type,
                trait_type,
                value,
            } => {
                output.push_str(&format!("\n  {}: {} ({})", trait_type, value, display_type));
            }
        }
    }
    output
}

/// Format a token listing row for display.
pub fn format_token(token: &TokenSummary) -> String {
    let material = material_name(token.color).unwrap_or("Unknown");
    format!(
        "#{} {} [{}]\n  Title: {}\n  Owner: {}",
        token.token_id,
        token.date(),
        material,
        token.title,
        token.owner
    )
}

/// Format tokens for display.
pub fn format_tokens(tokens: &[TokenSummary]) -> String {
    if tokens.is_empty() {
        return "No tokens minted.".to_string();
    }
    let mut output = format!("TOKENS ({})\n", tokens.len());
    output.push_str(&"-".repeat(40));
    for token in tokens {
        output.push_str(&format!("\n{}", format_token(token)));
        output.push('\n');
    }
    output
}

/// Format a date description for display.
pub fn format_date_info(info: &DateInfo) -> String {
    let mut output = format!("{} (token #{})", info.date(), info.token_id);
    match info.weekday {
        Some(weekday) => output.push_str(&format!("\n  Weekday: {}", weekday)),
        None => output.push_str("\n  Not a real calendar day"),
    }
    output.push_str(&format!(
        "\n  Leap year: {}",
        if info.leap_year { "yes" } else { "no" }
    ));
    if let Some(timestamp) = info.timestamp {
        output.push_str(&format!("\n  Timestamp: {}", timestamp));
    }
    output
}
