//! Date conversion CLI commands.

use clap::{Parser, Subcommand};
use datechain_core::calendar::TokenId;

/// Date conversion commands. These run locally.
#[derive(Debug, Parser)]
pub struct DatesCommand {
    #[command(subcommand)]
    pub action: DatesAction,
}

/// Available date actions.
#[derive(Debug, Subcommand)]
pub enum DatesAction {
    /// Token ID of a date.
    Encode { year: u64, month: u8, day: u8 },
    /// Date behind a token ID.
    Decode { id: TokenId },
    /// Date of a Unix timestamp (seconds).
    FromTimestamp {
        #[arg(allow_negative_numbers = true)]
        timestamp: i64,
    },
    /// Unix timestamp (seconds) of midnight UTC on a date.
    ToTimestamp { year: u64, month: u8, day: u8 },
}
