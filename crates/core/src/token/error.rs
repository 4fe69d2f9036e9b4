use thiserror::Error;

use crate::calendar::CalendarError;

/// Errors that can occur when turning ledger attributes into token metadata.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Unknown color code: {0}")]
    UnknownColor(u8),
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// Result type for token operations.
pub type Result<T> = std::result::Result<T, TokenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_color_display() {
        assert_eq!(
            TokenError::UnknownColor(42).to_string(),
            "Unknown color code: 42"
        );
    }

    #[test]
    fn test_calendar_error_is_transparent() {
        let error = TokenError::from(CalendarError::InvalidDate {
            year: 2021,
            month: 2,
            day: 30,
        });
        assert_eq!(error.to_string(), "Invalid date: 2021-02-30");
    }
}
