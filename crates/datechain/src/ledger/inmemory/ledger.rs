//! In-memory ledger implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::RwLock;

use datechain_core::calendar::{encode, CalendarDate, TokenId};
use datechain_core::ledger::{
    validate_claim, validate_title_change, ClaimError, ClaimRequest, Ledger, LedgerError,
    OwnerHandle, Result, CLAIM_PRICE_WEI,
};
use datechain_core::token::{Material, TokenAttributes};

use crate::ledger::genesis::genesis_tokens;

/// Relative odds of each material when a date is claimed, indexed by color code.
const MATERIAL_WEIGHTS: [u32; 6] = [40, 25, 15, 10, 7, 3];

#[derive(Debug, Clone)]
struct MintedToken {
    attributes: TokenAttributes,
    owner: OwnerHandle,
}

#[derive(Debug)]
struct LedgerState {
    tokens: HashMap<TokenId, MintedToken>,
    /// Token ids in mint order, for `token_by_index`.
    order: Vec<TokenId>,
    rng: StdRng,
}

impl LedgerState {
    fn new(rng: StdRng) -> Self {
        Self {
            tokens: HashMap::new(),
            order: Vec::new(),
            rng,
        }
    }

    fn mint(&mut self, id: TokenId, token: MintedToken) -> Result<()> {
        if self.tokens.contains_key(&id) {
            return Err(LedgerError::AlreadyMinted(id));
        }
        self.tokens.insert(id, token);
        self.order.push(id);
        Ok(())
    }

    fn mint_genesis(&mut self, owner: &OwnerHandle) {
        for token in genesis_tokens() {
            let attributes = TokenAttributes {
                date: token.date,
                color: token.material.code(),
                title: token.title.to_string(),
            };
            if let Ok(id) = encode(&token.date) {
                let minted = MintedToken {
                    attributes,
                    owner: owner.clone(),
                };
                if let Err(err) = self.mint(id, minted) {
                    tracing::warn!(token_id = %id, error = %err, "Skipping genesis token");
                }
            }
        }
    }

    fn draw_material(&mut self) -> Material {
        let total: u32 = MATERIAL_WEIGHTS.iter().sum();
        let mut roll = self.rng.random_range(0..total);
        for (material, weight) in Material::ALL.into_iter().zip(MATERIAL_WEIGHTS) {
            if roll < weight {
                return material;
            }
            roll -= weight;
        }
        Material::Paper
    }
}

/// In-memory ledger for testing and local development.
///
/// Enforces the same rules as the deployed ledger: exact payment, no dates
/// from the future, one token per calendar date and owner-only renames.
#[derive(Debug, Clone)]
pub struct InMemoryLedger {
    state: Arc<RwLock<LedgerState>>,
    /// Fixed "today" for claims; `None` uses the current UTC date.
    today: Option<CalendarDate>,
}

impl Default for InMemoryLedger {
    /// An empty ledger.
    fn default() -> Self {
        Self::from_state(LedgerState::new(StdRng::from_os_rng()))
    }
}

impl InMemoryLedger {
    /// Creates a ledger holding the genesis tokens, all owned by `owner`.
    pub fn with_genesis(owner: OwnerHandle) -> Self {
        let mut state = LedgerState::new(StdRng::from_os_rng());
        state.mint_genesis(&owner);
        Self::from_state(state)
    }

    fn from_state(state: LedgerState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
            today: None,
        }
    }

    fn today(&self) -> CalendarDate {
        self.today.unwrap_or_else(|| {
            let now = Utc::now().date_naive();
            CalendarDate {
                year: u64::try_from(now.year()).unwrap_or(1),
                month: now.month() as u8,
                day: now.day() as u8,
            }
        })
    }
}

#[cfg(test)]
impl InMemoryLedger {
    /// Ledger with a seeded material draw, holding the genesis tokens when an owner is given.
    pub(crate) fn seeded(owner: Option<&OwnerHandle>, seed: u64) -> Self {
        let mut state = LedgerState::new(StdRng::seed_from_u64(seed));
        if let Some(owner) = owner {
            state.mint_genesis(owner);
        }
        Self::from_state(state)
    }

    /// Pins the day claims are validated against.
    pub(crate) fn with_today(mut self, today: CalendarDate) -> Self {
        self.today = Some(today);
        self
    }
}

#[async_trait]
impl Ledger for InMemoryLedger {
    async fn get(&self, id: TokenId) -> Result<TokenAttributes> {
        let state = self.state.read().await;
        state
            .tokens
            .get(&id)
            .map(|token| token.attributes.clone())
            .ok_or(LedgerError::NotFound(id))
    }

    async fn owner_of(&self, id: TokenId) -> Result<OwnerHandle> {
        let state = self.state.read().await;
        state
            .tokens
            .get(&id)
            .map(|token| token.owner.clone())
            .ok_or(LedgerError::NotFound(id))
    }

    async fn total_supply(&self) -> Result<u64> {
        let state = self.state.read().await;
        Ok(state.order.len() as u64)
    }

    async fn token_by_index(&self, index: u64) -> Result<TokenId> {
        let state = self.state.read().await;
        let total = state.order.len() as u64;
        usize::try_from(index)
            .ok()
            .and_then(|i| state.order.get(i).copied())
            .ok_or(LedgerError::IndexOutOfBounds { index, total })
    }

    async fn claim(&self, request: ClaimRequest) -> Result<TokenId> {
        validate_claim(&request, &self.today(), CLAIM_PRICE_WEI)?;
        let id = encode(&request.date).map_err(|_| ClaimError::InvalidDate(request.date))?;

        let mut state = self.state.write().await;
        if state.tokens.contains_key(&id) {
            return Err(LedgerError::AlreadyMinted(id));
        }
        let material = state.draw_material();
        let token = MintedToken {
            attributes: TokenAttributes {
                date: request.date,
                color: material.code(),
                title: request.title,
            },
            owner: request.claimant,
        };
        state.mint(id, token)?;

        tracing::info!(
            token_id = %id,
            date = %request.date,
            material = material.name(),
            "Date claimed"
        );
        Ok(id)
    }

    async fn change_title_of(
        &self,
        id: TokenId,
        title: String,
        caller: &OwnerHandle,
    ) -> Result<()> {
        let mut state = self.state.write().await;
        let token = state.tokens.get_mut(&id).ok_or(LedgerError::NotFound(id))?;
        validate_title_change(&token.owner, caller)?;
        token.attributes.title = title;

        tracing::debug!(token_id = %id, title = %token.attributes.title, "Token renamed");
        Ok(())
    }
}
