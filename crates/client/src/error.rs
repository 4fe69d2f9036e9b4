//! Client error types.

use datechain_core::calendar::CalendarError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] CalendarError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = ClientError::NotFound {
            resource: "/token/1".to_string(),
        };
        assert_eq!(error.to_string(), "Resource not found: /token/1");
    }

    #[test]
    fn test_invalid_input_from_calendar_error() {
        let error = ClientError::from(CalendarError::InvalidTokenId("x".to_string()));
        assert_eq!(error.to_string(), "Invalid input: Invalid token id: \"x\"");
    }
}
