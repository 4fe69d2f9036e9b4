//! Redis cache backend implementation.
//!
//! Provides a shared cache for multi-instance deployments. Expiry is
//! delegated to Redis through `SET EX`.

mod cache;
mod error;

pub use cache::RedisCache;
