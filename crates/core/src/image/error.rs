use thiserror::Error;

use crate::calendar::CalendarError;

/// Errors that can occur when synthesizing a token image.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("Invalid color code: {0}")]
    InvalidColor(u8),
    #[error(transparent)]
    InvalidDate(#[from] CalendarError),
}

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, ImageError>;
