use thiserror::Error;

/// Errors that can occur when encoding dates or decoding timestamps.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: u64, month: u8, day: u8 },
    #[error("Invalid token id: {0:?}")]
    InvalidTokenId(String),
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),
}

/// Result type for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_display() {
        let error = CalendarError::InvalidDate {
            year: 2021,
            month: 13,
            day: 1,
        };
        assert_eq!(error.to_string(), "Invalid date: 2021-13-01");
    }

    #[test]
    fn test_invalid_token_id_display() {
        assert_eq!(
            CalendarError::InvalidTokenId("abc".to_string()).to_string(),
            "Invalid token id: \"abc\""
        );
    }

    #[test]
    fn test_timestamp_out_of_range_display() {
        assert_eq!(
            CalendarError::TimestampOutOfRange(-62_135_596_801).to_string(),
            "Timestamp out of range: -62135596801"
        );
    }
}
