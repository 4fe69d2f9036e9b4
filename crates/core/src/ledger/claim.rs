//! Rules a ledger enforces before minting or renaming a token.

use crate::calendar::CalendarDate;

use super::error::ClaimError;
use super::types::{ClaimRequest, OwnerHandle};

/// Checks a claim against the price and the current day.
///
/// The payment must match `price` exactly and the date must be a real day
/// that is not after `today`. Uniqueness is checked by the ledger itself.
pub fn validate_claim(
    request: &ClaimRequest,
    today: &CalendarDate,
    price: u128,
) -> Result<(), ClaimError> {
    if request.payment != price {
        return Err(ClaimError::IncorrectPayment {
            expected: price,
            actual: request.payment,
        });
    }
    if !request.date.is_gregorian() {
        return Err(ClaimError::InvalidDate(request.date));
    }
    if request.date > *today {
        return Err(ClaimError::FutureDate(request.date));
    }
    Ok(())
}

/// Only the current owner may rename a token.
pub fn validate_title_change(owner: &OwnerHandle, caller: &OwnerHandle) -> Result<(), ClaimError> {
    if owner != caller {
        return Err(ClaimError::NotOwner);
    }
    Ok(())
}
