use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;

/// Price of a claim: 10 finney.
pub const CLAIM_PRICE_WEI: u128 = 10_000_000_000_000_000;

/// Opaque handle of a token owner (e.g. an account address).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerHandle(pub String);

impl OwnerHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A request to mint the token of a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRequest {
    pub date: CalendarDate,
    pub title: String,
    /// Amount paid, in wei.
    pub payment: u128,
    pub claimant: OwnerHandle,
}

impl ClaimRequest {
    /// Creates a request paying the exact claim price.
    pub fn new(date: CalendarDate, title: impl Into<String>, claimant: OwnerHandle) -> Self {
        Self {
            date,
            title: title.into(),
            payment: CLAIM_PRICE_WEI,
            claimant,
        }
    }

    pub fn with_payment(mut self, payment: u128) -> Self {
        self.payment = payment;
        self
    }
}
