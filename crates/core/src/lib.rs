//! Functional core for datechain.
//!
//! Everything in this crate is pure: date arithmetic, attribute resolution,
//! image synthesis and the contracts (traits) that the server crate
//! implements for the ledger and the cache.

pub mod cache;
pub mod calendar;
pub mod image;
pub mod ledger;
pub mod token;
