mod error;
mod resolver;
mod types;

pub use error::{Result, TokenError};
pub use resolver::{image_url, resolve, TOKEN_DESCRIPTION};
pub use types::{
    material_name, Attribute, Material, TokenAttributes, TokenMetadata, TokenSummary,
};
