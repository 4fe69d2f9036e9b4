//! Token read handlers.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use datechain_core::image::SVG_CONTENT_TYPE;
use datechain_core::token::{TokenMetadata, TokenSummary};

use crate::handlers::AppError;
use crate::state::AppState;

/// GET /token/{id} - Metadata of a token.
#[axum::debug_handler]
pub async fn get_token_metadata(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TokenMetadata>, AppError> {
    let metadata = state.metadata.get_metadata(&id).await?;
    Ok(Json(metadata))
}

/// GET /token/svg/{id}/{year}/{month}/{day}/{color} - Image of a token.
#[axum::debug_handler]
pub async fn get_token_image(
    State(state): State<AppState>,
    Path((id, year, month, day, color)): Path<(String, String, String, String, String)>,
) -> Result<Response, AppError> {
    let svg = state
        .metadata
        .get_image(&id, &year, &month, &day, &color)?;
    Ok(([(header::CONTENT_TYPE, SVG_CONTENT_TYPE)], svg).into_response())
}

/// GET /tokens - Every minted token, in mint order.
#[axum::debug_handler]
pub async fn list_tokens(State(state): State<AppState>) -> Result<Json<Vec<TokenSummary>>, AppError> {
    let tokens = state.metadata.list_tokens().await?;
    Ok(Json(tokens))
}
