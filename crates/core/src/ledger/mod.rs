mod claim;
mod error;
mod traits;
mod types;

pub use claim::{validate_claim, validate_title_change};
pub use error::{ClaimError, LedgerError, Result};
pub use traits::Ledger;
pub use types::{ClaimRequest, OwnerHandle, CLAIM_PRICE_WEI};
