//! datechain-client CLI entry point.

use clap::Parser;
use datechain_client::cli::dates::DatesAction;
use datechain_client::cli::tokens::TokensAction;
use datechain_client::cli::{Cli, Commands, OutputFormat};
use datechain_client::client::DatechainClient;
use datechain_client::dates;
use datechain_client::output::{format_output, pretty};
use datechain_core::calendar::CalendarDate;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = DatechainClient::new(&cli.base_url);

    match cli.command {
        Commands::Tokens(tokens_cmd) => match tokens_cmd.action {
            TokensAction::Get { id } => {
                let metadata = client.get_token(id).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&metadata, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_metadata(&metadata)),
                }
            }
            TokensAction::Image {
                id,
                year,
                month,
                day,
                color,
                output,
            } => {
                let date = CalendarDate::new(year, month, day)?;
                let svg = client.get_token_image(id, date, color).await?;
                match output {
                    Some(path) => {
                        tokio::fs::write(&path, svg).await?;
                        if !cli.quiet {
                            println!("Wrote {}", path.display());
                        }
                    }
                    None => println!("{}", svg),
                }
            }
            TokensAction::List => {
                let tokens = client.list_tokens().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&tokens, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_tokens(&tokens)),
                }
            }
        },
        Commands::Dates(dates_cmd) => {
            let info = match dates_cmd.action {
                DatesAction::Encode { year, month, day } => dates::encode_date(year, month, day)?,
                DatesAction::Decode { id } => dates::decode_id(id)?,
                DatesAction::FromTimestamp { timestamp } => dates::from_timestamp(timestamp)?,
                DatesAction::ToTimestamp { year, month, day } => {
                    let timestamp = dates::to_timestamp(year, month, day)?;
                    println!("{}", timestamp);
                    return Ok(());
                }
            };
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&info, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_date_info(&info)),
            }
        }
        Commands::Health => {
            client.livez().await?;
            if !cli.quiet {
                println!("OK");
            }
        }
    }

    Ok(())
}
