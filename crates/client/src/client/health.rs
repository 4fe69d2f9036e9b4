//! Health check operations.

use super::DatechainClient;
use crate::error::{ClientError, Result};

impl DatechainClient {
    /// Check that the server is alive.
    pub async fn livez(&self) -> Result<()> {
        let response = self
            .client
            .get(self.url("/livez"))
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ClientError::Connection(e.to_string())
                } else {
                    ClientError::Request(e)
                }
            })?;
        Self::check_status(response).await?;
        Ok(())
    }
}
