//! CLI command definitions.

pub mod dates;
pub mod tokens;

use clap::{Parser, Subcommand, ValueEnum};

use crate::client::DEFAULT_BASE_URL;

/// CLI client for the datechain API.
#[derive(Debug, Parser)]
#[command(name = "datechain-client")]
#[command(about = "CLI client for the datechain API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "DATECHAIN_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Token metadata and images.
    Tokens(tokens::TokensCommand),
    /// Offline date and token id conversions.
    Dates(dates::DatesCommand),
    /// Server liveness check.
    Health,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens_get() {
        let cli = Cli::try_parse_from(["datechain-client", "tokens", "get", "745795"]).unwrap();
        match cli.command {
            Commands::Tokens(tokens::TokensCommand {
                action: tokens::TokensAction::Get { id },
            }) => assert_eq!(id.value(), 745_795),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_malformed_token_id() {
        assert!(Cli::try_parse_from(["datechain-client", "tokens", "get", "abc"]).is_err());
    }

    #[test]
    fn test_parse_dates_encode_with_json() {
        let cli = Cli::try_parse_from([
            "datechain-client",
            "--format",
            "json",
            "dates",
            "encode",
            "2005",
            "10",
            "29",
        ])
        .unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(matches!(
            cli.command,
            Commands::Dates(dates::DatesCommand {
                action: dates::DatesAction::Encode {
                    year: 2005,
                    month: 10,
                    day: 29
                }
            })
        ));
    }

    #[test]
    fn test_parse_negative_timestamp() {
        let cli = Cli::try_parse_from([
            "datechain-client",
            "dates",
            "from-timestamp",
            "--",
            "-86400",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Dates(dates::DatesCommand {
                action: dates::DatesAction::FromTimestamp { timestamp: -86_400 }
            })
        ));
    }
}
