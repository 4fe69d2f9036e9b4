use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        tokens::{get_token_image, get_token_metadata, list_tokens},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
///
/// No request timeout is applied: a resolution in flight runs until the
/// ledger answers or fails.
pub fn create_app(state: AppState) -> Router {
    // Catalog consumers fetch metadata and images cross-origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    let token_routes = Router::new()
        .route("/token/{id}", get(get_token_metadata))
        .route(
            "/token/svg/{id}/{year}/{month}/{day}/{color}",
            get(get_token_image),
        )
        .route("/tokens", get(list_tokens))
        .layer(cors);

    Router::new()
        .merge(token_routes)
        .route("/livez", get(livez))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
