use std::{env, time::Duration};

use thiserror::Error;
use url::Url;

/// Default public base of the image URLs.
pub const DEFAULT_BASE_URI: &str = "http://localhost:8080";

/// Default lifetime of a cached metadata record.
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 600;

/// Errors found while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BASE_URI {value:?} is not a valid URL: {source}")]
    InvalidBaseUri {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("BASE_URI {0:?} must use http or https")]
    UnsupportedScheme(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Public base URL the image links are built on, without a trailing slash.
    pub base_uri: String,
    /// Cache TTL in seconds (default: 600)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries; `None` leaves the cache unbounded.
    pub cache_max_entries: Option<usize>,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
    /// Owner of the tokens minted at startup by the in-memory ledger.
    pub genesis_owner: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BASE_URI` - Public base URL of the service (default: "http://localhost:8080")
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 600)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: unbounded)
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    /// - `GENESIS_OWNER` - Owner of the genesis tokens (default: the zero address)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_uri = lookup("BASE_URI").unwrap_or_else(|| DEFAULT_BASE_URI.to_string());

        Ok(Self {
            base_uri: validate_base_uri(&base_uri)?,
            cache_ttl_seconds: lookup("CACHE_TTL_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_SECONDS),
            cache_max_entries: lookup("CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .filter(|max: &usize| *max > 0),
            redis_url: lookup("REDIS_URL")
                .unwrap_or_else(|| "redis://localhost:6379".to_string()),
            genesis_owner: lookup("GENESIS_OWNER")
                .unwrap_or_else(|| "0x0000000000000000000000000000000000000000".to_string()),
        })
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_uri: DEFAULT_BASE_URI.to_string(),
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
            cache_max_entries: None,
            redis_url: "redis://localhost:6379".to_string(),
            genesis_owner: "0x0000000000000000000000000000000000000000".to_string(),
        }
    }
}

/// Checks that the base URI is an absolute http(s) URL and strips the
/// trailing slash so paths can be appended directly.
fn validate_base_uri(value: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidBaseUri {
        value: value.to_string(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(value.to_string()));
    }
    Ok(value.trim_end_matches('/').to_string())
}
