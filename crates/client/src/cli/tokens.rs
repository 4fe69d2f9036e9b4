//! Token CLI commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use datechain_core::calendar::TokenId;

/// Token commands.
#[derive(Debug, Parser)]
pub struct TokensCommand {
    #[command(subcommand)]
    pub action: TokensAction,
}

/// Available token actions.
#[derive(Debug, Subcommand)]
pub enum TokensAction {
    /// Get the metadata of a token.
    Get {
        /// Token ID.
        id: TokenId,
    },
    /// Download the SVG image of a token.
    Image {
        /// Token ID.
        id: TokenId,
        year: u64,
        month: u8,
        day: u8,
        /// Material color code (0-5).
        color: u8,
        /// Write the image to a file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List every minted token.
    List,
}
