//! Memoization of resolved token metadata.

use std::sync::Arc;
use std::time::Duration;

use datechain_core::cache::{deserialize_metadata, serialize_metadata, token_metadata_key, Cache};
use datechain_core::calendar::TokenId;
use datechain_core::token::TokenMetadata;

/// Per-token cache of resolver output with a fixed ttl.
///
/// Read-through only: the caller resolves on a miss and stores the result
/// with [`ResolutionCache::put`]. Backend failures are logged and behave as
/// misses, so a broken cache never fails a request.
#[derive(Clone)]
pub struct ResolutionCache {
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl ResolutionCache {
    pub fn new(cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    /// Returns the cached record, or `None` on a miss or an expired entry.
    pub async fn get(&self, id: TokenId) -> Option<TokenMetadata> {
        let key = token_metadata_key(id);

        match self.cache.get(&key).await {
            Ok(Some(bytes)) => match deserialize_metadata(&bytes) {
                Ok(metadata) => {
                    tracing::trace!(token_id = %id, "Cache hit for token metadata");
                    Some(metadata)
                }
                Err(err) => {
                    tracing::warn!(token_id = %id, error = %err, "Cache metadata deserialization failed");
                    None
                }
            },
            Ok(None) => {
                tracing::trace!(token_id = %id, "Cache miss for token metadata");
                None
            }
            Err(err) => {
                tracing::warn!(token_id = %id, error = %err, "Cache read failed");
                None
            }
        }
    }

    /// Stores a record; it is served until `ttl` has elapsed.
    pub async fn put(&self, id: TokenId, metadata: &TokenMetadata) {
        let key = token_metadata_key(id);

        let bytes = match serialize_metadata(metadata) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(token_id = %id, error = %err, "Cache metadata serialization failed");
                return;
            }
        };

        if let Err(err) = self.cache.set(&key, &bytes, Some(self.ttl)).await {
            tracing::warn!(token_id = %id, error = %err, "Failed to cache token metadata");
        }
    }
}
