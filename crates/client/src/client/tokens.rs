//! Token API operations.

use datechain_core::calendar::{CalendarDate, TokenId};
use datechain_core::image::SVG_CONTENT_TYPE;
use datechain_core::token::{TokenMetadata, TokenSummary};

use super::DatechainClient;
use crate::error::{ClientError, Result};

impl DatechainClient {
    /// Get the metadata of a token.
    pub async fn get_token(&self, id: TokenId) -> Result<TokenMetadata> {
        let response = self
            .client
            .get(self.url(&format!("/token/{}", id)))
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Get the SVG image of a token.
    pub async fn get_token_image(
        &self,
        id: TokenId,
        date: CalendarDate,
        color: u8,
    ) -> Result<String> {
        let response = self
            .client
            .get(self.url(&image_path(id, date, color)))
            .send()
            .await?;

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let svg = self.handle_text_response(response).await?;

        match content_type.as_deref() {
            Some(ct) if ct.starts_with(SVG_CONTENT_TYPE) => Ok(svg),
            other => Err(ClientError::InvalidResponse(format!(
                "expected {SVG_CONTENT_TYPE}, got {}",
                other.unwrap_or("no content type")
            ))),
        }
    }

    /// List every minted token.
    pub async fn list_tokens(&self) -> Result<Vec<TokenSummary>> {
        let response = self.client.get(self.url("/tokens")).send().await?;
        self.handle_response(response).await
    }
}

fn image_path(id: TokenId, date: CalendarDate, color: u8) -> String {
    format!(
        "/token/svg/{}/{}/{}/{}/{}",
        id, date.year, date.month, date.day, color
    )
}
