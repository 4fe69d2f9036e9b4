//! datechain_client - CLI client for the datechain API.

pub mod cli;
pub mod client;
pub mod dates;
pub mod error;
pub mod output;

pub use client::DatechainClient;
pub use error::{ClientError, Result};
