//! In-memory cache backend implementation.
//!
//! Provides a thread-safe in-memory cache with lazy TTL expiry for
//! single-instance deployments.

mod cache;

pub use cache::MemoryCache;
