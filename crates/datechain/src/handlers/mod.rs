pub mod error;
pub mod health;
pub mod tokens;

pub use error::AppError;
