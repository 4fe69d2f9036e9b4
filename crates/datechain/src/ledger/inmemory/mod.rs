//! In-memory ledger for development and testing.
//!
//! Stores minted tokens in a HashMap wrapped in `Arc<RwLock<_>>`. Nothing is
//! persisted: all claims are lost when the ledger is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use datechain::ledger::InMemoryLedger;
//! use datechain_core::ledger::OwnerHandle;
//!
//! let ledger = InMemoryLedger::with_genesis(OwnerHandle::new("0xdeployer"));
//! ```

mod ledger;

pub use ledger::InMemoryLedger;
