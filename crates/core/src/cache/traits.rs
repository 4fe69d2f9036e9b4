use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Trait for basic cache operations.
///
/// Values are opaque bytes written as a whole, so a reader never observes a
/// partially written entry.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key. Expired values are reported as missing.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;
}
