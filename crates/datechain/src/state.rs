//! Application state shared by the request handlers.
//!
//! Holds the metadata service built on top of the ledger capability.
//! The cache backend is chosen at compile time via feature flags; each
//! backend gets its own `AppState::new` constructor below.

use std::sync::Arc;

use datechain_core::cache::Cache;
use datechain_core::ledger::{Ledger, OwnerHandle};

use crate::config::Config;
use crate::ledger::InMemoryLedger;
use crate::service::{MetadataService, ResolutionCache};

/// Shared application state.
///
/// Cloned for each request handler; every field is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    /// Metadata and image read operations.
    pub metadata: MetadataService,
}

impl AppState {
    /// Creates a new AppState from a ledger, a cache backend and the configuration.
    pub fn build(ledger: Arc<dyn Ledger>, cache: Arc<dyn Cache>, config: &Config) -> Self {
        let resolution_cache = ResolutionCache::new(cache, config.cache_ttl());
        let metadata = MetadataService::new(ledger, resolution_cache, &config.base_uri);

        Self { metadata }
    }

    /// The in-memory ledger seeded with the genesis tokens.
    fn genesis_ledger(config: &Config) -> Arc<InMemoryLedger> {
        Arc::new(InMemoryLedger::with_genesis(OwnerHandle::new(
            config.genesis_owner.clone(),
        )))
    }
}

#[cfg(feature = "memory")]
mod inmemory_memory {
    use super::*;
    use crate::cache::MemoryCache;

    impl AppState {
        /// Creates AppState with the in-memory ledger and in-memory cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let ledger = Self::genesis_ledger(config);
            let cache = Arc::new(MemoryCache::new(config.cache_max_entries));

            tracing::info!(
                ttl_seconds = config.cache_ttl_seconds,
                max_entries = ?config.cache_max_entries,
                "Using in-memory cache"
            );

            Ok(Self::build(ledger, cache, config))
        }
    }

    impl Default for AppState {
        /// Genesis ledger, unbounded cache and default configuration.
        fn default() -> Self {
            let config = Config::default();
            Self::build(
                Self::genesis_ledger(&config),
                Arc::new(MemoryCache::unbounded()),
                &config,
            )
        }
    }
}

#[cfg(feature = "redis")]
mod inmemory_redis {
    use super::*;
    use crate::cache::RedisCache;

    impl AppState {
        /// Creates AppState with the in-memory ledger and Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let ledger = Self::genesis_ledger(config);
            let cache = Arc::new(RedisCache::new(&config.redis_url).await?);

            tracing::info!(
                ttl_seconds = config.cache_ttl_seconds,
                "Using Redis cache"
            );

            Ok(Self::build(ledger, cache, config))
        }
    }
}
