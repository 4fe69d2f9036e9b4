//! In-memory cache implementation with optional LRU eviction.
//!
//! Expiry is lazy: an entry is checked against its ttl when it is read and
//! dropped at that moment. No background sweeper runs.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;
use tokio::time::Instant;

use datechain_core::cache::{Cache, Result};

/// A single cache entry, written once as a whole.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    inserted_at: Instant,
    ttl: Option<Duration>,
}

impl CacheEntry {
    fn new(value: Vec<u8>, ttl: Option<Duration>) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
            ttl,
        }
    }

    /// An entry is stale once `now - inserted_at >= ttl`.
    fn is_expired(&self) -> bool {
        self.ttl.is_some_and(|ttl| self.inserted_at.elapsed() >= ttl)
    }
}

/// In-memory cache implementation.
///
/// Thread-safe cache using `Arc<RwLock<LruCache>>` for concurrent access.
/// Without a capacity the cache grows with the number of distinct keys;
/// with one, the least recently used entry is evicted on overflow.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
}

impl MemoryCache {
    /// Creates a new in-memory cache.
    ///
    /// `max_entries` of `None` (or `Some(0)`) leaves the cache unbounded.
    pub fn new(max_entries: Option<usize>) -> Self {
        let store = match max_entries.and_then(NonZeroUsize::new) {
            Some(capacity) => LruCache::new(capacity),
            None => LruCache::unbounded(),
        };
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates a cache without a capacity bound.
    pub fn unbounded() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
impl MemoryCache {
    /// Number of entries currently held, including expired ones not yet read.
    async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        // Write lock: a hit updates the LRU order and a stale entry is dropped
        let mut store = self.store.write().await;

        match store.get(key) {
            Some(entry) if entry.is_expired() => {
                store.pop(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(600);

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::unbounded();
        let key = "token:0:metadata";
        let value = b"test value";

        cache.set(key, value, None).await.unwrap();
        let result = cache.get(key).await.unwrap();

        assert_eq!(result, Some(value.to_vec()));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let cache = MemoryCache::unbounded();
        let result = cache.get("token:1:metadata").await.unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ttl_expiration() {
        let cache = MemoryCache::unbounded();
        let key = "test:ttl";

        cache.set(key, b"short-lived", Some(TTL)).await.unwrap();

        tokio::time::advance(TTL - Duration::from_secs(1)).await;
        assert!(cache.get(key).await.unwrap().is_some());

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(cache.get(key).await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_is_dropped_on_read() {
        let cache = MemoryCache::unbounded();
        cache.set("a", b"1", Some(TTL)).await.unwrap();
        cache.set("b", b"2", None).await.unwrap();

        tokio::time::advance(TTL).await;
        // Still held until someone reads it
        assert_eq!(cache.len().await, 2);

        assert!(cache.get("a").await.unwrap().is_none());
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overwrite_resets_insertion_time() {
        let cache = MemoryCache::unbounded();
        let key = "test:overwrite";

        cache.set(key, b"first", Some(TTL)).await.unwrap();
        tokio::time::advance(TTL - Duration::from_secs(10)).await;
        cache.set(key, b"second", Some(TTL)).await.unwrap();
        tokio::time::advance(Duration::from_secs(20)).await;

        let result = cache.get(key).await.unwrap();
        assert_eq!(result, Some(b"second".to_vec()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ttl_never_expires() {
        let cache = MemoryCache::unbounded();
        let key = "test:no-ttl";

        cache.set(key, b"persistent", None).await.unwrap();

        tokio::time::advance(Duration::from_secs(365 * 86_400)).await;
        assert!(cache.get(key).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_unbounded_keeps_everything() {
        let cache = MemoryCache::unbounded();
        for id in 0..5_000 {
            cache.set(&format!("token:{id}:metadata"), b"x", None).await.unwrap();
        }
        assert_eq!(cache.len().await, 5_000);
        assert!(cache.get("token:0:metadata").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_zero_capacity_means_unbounded() {
        let cache = MemoryCache::new(Some(0));
        cache.set("key1", b"value1", None).await.unwrap();
        cache.set("key2", b"value2", None).await.unwrap();
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        let cache = MemoryCache::new(Some(3));

        cache.set("key1", b"value1", None).await.unwrap();
        cache.set("key2", b"value2", None).await.unwrap();
        cache.set("key3", b"value3", None).await.unwrap();

        // Access key1 to make it recently used
        cache.get("key1").await.unwrap();

        // Insert a 4th entry - should evict key2 (least recently used)
        cache.set("key4", b"value4", None).await.unwrap();

        assert!(cache.get("key1").await.unwrap().is_some());
        assert!(cache.get("key2").await.unwrap().is_none());
        assert!(cache.get("key3").await.unwrap().is_some());
        assert!(cache.get("key4").await.unwrap().is_some());
    }
}
