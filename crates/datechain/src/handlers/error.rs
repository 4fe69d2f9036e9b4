use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use datechain_core::ledger::LedgerError;

use crate::service::ServiceError;

/// Error returned by the token handlers.
///
/// Every failure becomes an empty `404 Not Found`: a consumer cannot tell a
/// malformed request from an unminted token or an unreachable ledger. The
/// cause is only visible in the logs.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0.downcast_ref::<ServiceError>() {
            Some(ServiceError::Ledger(LedgerError::ConnectionFailed(_))) => {
                tracing::warn!(error = %self.0, "Ledger unavailable");
            }
            Some(_) => {
                tracing::debug!(error = %self.0, "Token request failed");
            }
            None => {
                tracing::error!(error = ?self.0, "Unexpected handler error");
            }
        }

        StatusCode::NOT_FOUND.into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
