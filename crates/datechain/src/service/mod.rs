//! Read operations served to catalog consumers.
//!
//! `MetadataService` is constructed once in `AppState` and shared by the
//! handlers; it owns the ledger and cache handles so tests can build
//! isolated instances.

mod error;
mod metadata;
mod resolution_cache;

pub use error::ServiceError;
pub use metadata::MetadataService;
pub use resolution_cache::ResolutionCache;
