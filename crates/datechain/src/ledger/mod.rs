//! Ledger implementations.
//!
//! The production ledger is an external collaborator reached through the
//! `datechain_core::ledger::Ledger` capability. This module holds the
//! in-process fixture used for development and tests.

mod genesis;
pub mod inmemory;

pub use inmemory::InMemoryLedger;
