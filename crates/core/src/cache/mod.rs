mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::token_metadata_key;
pub use serialization::{deserialize_metadata, serialize_metadata, SerializationError};
pub use traits::Cache;
