use thiserror::Error;

use crate::calendar::{CalendarDate, TokenId};

/// Reasons a ledger refuses to mint or modify a token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Claiming a date costs {expected} wei, got {actual}")]
    IncorrectPayment { expected: u128, actual: u128 },
    #[error("A date from the future can't be claimed: {0}")]
    FutureDate(CalendarDate),
    #[error("Not a real calendar date: {0}")]
    InvalidDate(CalendarDate),
    #[error("Only the owner of this date can change its title")]
    NotOwner,
}

/// Errors that can occur during ledger operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Token not found: {0}")]
    NotFound(TokenId),
    #[error("Token already minted: {0}")]
    AlreadyMinted(TokenId),
    #[error("Index {index} out of bounds (total supply {total})")]
    IndexOutOfBounds { index: u64, total: u64 },
    #[error(transparent)]
    Claim(#[from] ClaimError),
    #[error("Ledger connection failed: {0}")]
    ConnectionFailed(String),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        assert_eq!(
            LedgerError::NotFound(TokenId(12)).to_string(),
            "Token not found: 12"
        );
    }

    #[test]
    fn test_already_minted_display() {
        assert_eq!(
            LedgerError::AlreadyMinted(TokenId(0)).to_string(),
            "Token already minted: 0"
        );
    }

    #[test]
    fn test_index_out_of_bounds_display() {
        let error = LedgerError::IndexOutOfBounds { index: 3, total: 3 };
        assert_eq!(error.to_string(), "Index 3 out of bounds (total supply 3)");
    }

    #[test]
    fn test_claim_error_display() {
        let date = CalendarDate::new(2999, 1, 1).unwrap();
        assert_eq!(
            LedgerError::from(ClaimError::FutureDate(date)).to_string(),
            "A date from the future can't be claimed: 2999-01-01"
        );
        assert_eq!(
            ClaimError::IncorrectPayment {
                expected: 10,
                actual: 0
            }
            .to_string(),
            "Claiming a date costs 10 wei, got 0"
        );
    }

    #[test]
    fn test_connection_failed_display() {
        assert_eq!(
            LedgerError::ConnectionFailed("timeout".to_string()).to_string(),
            "Ledger connection failed: timeout"
        );
    }
}
