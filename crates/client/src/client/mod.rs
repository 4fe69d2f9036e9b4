//! HTTP client for the datechain API.

pub mod health;
pub mod tokens;

use crate::error::{ClientError, Result};

/// Default server URL, matching the server's default port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// HTTP client for the datechain API.
#[derive(Debug, Clone)]
pub struct DatechainClient {
    client: reqwest::Client,
    base_url: String,
}

impl DatechainClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create from environment (DATECHAIN_URL or default).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("DATECHAIN_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a JSON body or turn the status into an error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(ClientError::from)
    }

    /// Return a text body or turn the status into an error.
    async fn handle_text_response(&self, response: reqwest::Response) -> Result<String> {
        let response = Self::check_status(response).await?;
        response.text().await.map_err(ClientError::from)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status.as_u16() == 404 {
            // The server answers every failed token lookup with an empty 404
            Err(ClientError::NotFound {
                resource: response.url().path().to_string(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}
