//! Handler for expanded URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an expanded URL token to its original destination.
///
/// # Endpoint
///
/// `GET /{token}`
///
/// The token is the random path segment of a previously generated expanded
/// URL. Resolution is a plain read; visiting the link any number of times
/// yields the same redirect until the original URL is re-expanded.
///
/// # Errors
///
/// Returns 404 Not Found if the token doesn't match any link.
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let original_url = state.redirect_service.resolve(&token).await?;

    debug!(%token, "redirecting to original URL");

    Ok(Redirect::temporary(&original_url))
}
