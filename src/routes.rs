//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /api/expand` - Create or refresh an expanded URL
//! - `GET  /health`     - Liveness check
//! - `GET  /{token}`    - Expanded URL redirect
//!
//! Static routes take priority over the `/{token}` capture, so `/health`
//! is never mistaken for a redirect token.

use crate::api::handlers::{expand_handler, health_handler, redirect_handler};
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/api/expand", post(expand_handler))
        .route("/health", get(health_handler))
        .route("/{token}", get(redirect_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
