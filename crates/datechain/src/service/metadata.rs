//! The two read operations, metadata and image, plus the bulk listing.

use std::str::FromStr;
use std::sync::Arc;

use datechain_core::calendar::{parse_digits, TokenId};
use datechain_core::image;
use datechain_core::ledger::Ledger;
use datechain_core::token::{resolve, TokenMetadata, TokenSummary};

use super::error::{Result, ServiceError};
use super::resolution_cache::ResolutionCache;

/// Serves token metadata and images from path-segment inputs.
#[derive(Clone)]
pub struct MetadataService {
    ledger: Arc<dyn Ledger>,
    cache: ResolutionCache,
    base_uri: String,
}

impl MetadataService {
    /// Creates a service. `base_uri` prefixes every image URL it hands out.
    pub fn new(ledger: Arc<dyn Ledger>, cache: ResolutionCache, base_uri: impl Into<String>) -> Self {
        Self {
            ledger,
            cache,
            base_uri: base_uri.into(),
        }
    }

    /// Returns the descriptive record of a token.
    ///
    /// A malformed id fails before the ledger is consulted. On a cache miss
    /// the ledger is read, the record resolved and cached. Concurrent misses
    /// for the same id each resolve on their own.
    pub async fn get_metadata(&self, id: &str) -> Result<TokenMetadata> {
        let id = TokenId::from_str(id).map_err(|e| ServiceError::InvalidInput(e.to_string()))?;

        if let Some(metadata) = self.cache.get(id).await {
            return Ok(metadata);
        }

        let attributes = self.ledger.get(id).await?;
        let metadata = resolve(id, &attributes, &self.base_uri)?;
        self.cache.put(id, &metadata).await;

        tracing::debug!(token_id = %id, "Resolved token metadata");
        Ok(metadata)
    }

    /// Renders the image of a token from its path coordinates.
    ///
    /// The ledger is not consulted: the image is a pure function of its inputs.
    pub fn get_image(
        &self,
        id: &str,
        year: &str,
        month: &str,
        day: &str,
        color: &str,
    ) -> Result<String> {
        let id = TokenId::from_str(id).map_err(|e| ServiceError::InvalidInput(e.to_string()))?;
        let year = parse_segment("year", year)?;
        let month = parse_segment("month", month)?;
        let day = parse_segment("day", day)?;
        let color = parse_segment("color", color)?;

        Ok(image::render(id, year, month, day, color)?)
    }

    /// Lists every minted token in mint order. Never cached.
    pub async fn list_tokens(&self) -> Result<Vec<TokenSummary>> {
        let total = self.ledger.total_supply().await?;
        let mut tokens = Vec::with_capacity(usize::try_from(total).unwrap_or_default());

        for index in 0..total {
            let id = self.ledger.token_by_index(index).await?;
            let attributes = self.ledger.get(id).await?;
            let owner = self.ledger.owner_of(id).await?;
            tokens.push(TokenSummary::new(id, attributes, owner.0));
        }

        Ok(tokens)
    }
}

fn parse_segment<T: FromStr>(name: &str, value: &str) -> Result<T> {
    parse_digits(value).ok_or_else(|| ServiceError::InvalidInput(format!("{name} {value:?}")))
}
