//! Handler for the URL expansion endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::expand::{ExpandRequest, ExpandResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates or refreshes the expanded URL for an original URL.
///
/// # Endpoint
///
/// `POST /api/expand`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/article",
///   "length": 10
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "expandedUrl": "https://wrap.example.com/aB3xYz9QwE"
/// }
/// ```
///
/// Re-submitting the same URL generates a fresh alias and voids the previous
/// one for future redirects.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is malformed or the length is outside
/// `[5, 1000]`. Returns 500 if no collision-free token could be generated.
pub async fn expand_handler(
    State(state): State<AppState>,
    Json(payload): Json<ExpandRequest>,
) -> Result<Json<ExpandResponse>, AppError> {
    payload.validate()?;

    let expanded_url = state
        .expand_service
        .expand(&payload.url, payload.length as usize)
        .await?;

    Ok(Json(ExpandResponse { expanded_url }))
}
