use thiserror::Error;

use datechain_core::image::ImageError;
use datechain_core::ledger::LedgerError;
use datechain_core::token::TokenError;

/// Why a read operation failed.
///
/// The detail is kept for logging. Callers over HTTP only ever see a
/// `404 Not Found`, whatever the variant.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    Image(#[from] ImageError),
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;
