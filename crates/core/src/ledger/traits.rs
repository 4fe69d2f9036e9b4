use async_trait::async_trait;

use crate::calendar::TokenId;
use crate::token::TokenAttributes;

use super::types::{ClaimRequest, OwnerHandle};
use super::Result;

/// Read (claim and rename) capability of the ledger that stores token ownership
/// and attributes.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Gets the stored attributes of a minted token.
    async fn get(&self, id: TokenId) -> Result<TokenAttributes>;

    /// Gets the owner of a minted token.
    async fn owner_of(&self, id: TokenId) -> Result<OwnerHandle>;

    /// Number of minted tokens.
    async fn total_supply(&self) -> Result<u64>;

    /// Gets the id of the `index`-th minted token, in mint order.
    async fn token_by_index(&self, index: u64) -> Result<TokenId>;

    /// Mints the token of a date for the claimant.
    async fn claim(&self, request: ClaimRequest) -> Result<TokenId>;

    /// Renames a token. Only its owner may do so.
    async fn change_title_of(
        &self,
        id: TokenId,
        title: String,
        caller: &OwnerHandle,
    ) -> Result<()>;
}
