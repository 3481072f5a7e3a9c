//! URL expansion service.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::token_generator::{MAX_TOKEN_LENGTH, MIN_TOKEN_LENGTH, TokenGenerator};
use serde_json::json;
use url::Url;

/// Upsert attempts before giving up on finding a collision-free token.
const MAX_UPSERT_ATTEMPTS: usize = 5;

/// Service that wraps an original URL in a freshly generated expanded URL.
///
/// Orchestrates the token generator and the link store: validates input,
/// composes `base_url + "/" + token`, and upserts the mapping keyed on the
/// original URL. An expanded-URL collision with a different link triggers
/// regeneration with a bounded retry budget.
pub struct ExpandService {
    repository: Arc<dyn LinkRepository>,
    token_generator: Arc<dyn TokenGenerator>,
    base_url: String,
}

impl ExpandService {
    /// Creates a new expand service.
    ///
    /// `base_url` may carry a trailing slash; it is trimmed before tokens
    /// are appended.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        token_generator: Arc<dyn TokenGenerator>,
        base_url: &str,
    ) -> Self {
        Self {
            repository,
            token_generator,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates or refreshes the expanded URL for `original_url`.
    ///
    /// Re-expanding a URL that already has an alias replaces the old alias;
    /// only the most recent expanded URL resolves afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is malformed or `length`
    /// is outside `[5, 1000]`. Nothing is persisted in that case.
    ///
    /// Returns [`AppError::Exhausted`] if every generated token collided
    /// with an existing expanded URL.
    ///
    /// Returns [`AppError::Unavailable`] if the store cannot be written.
    pub async fn expand(&self, original_url: &str, length: usize) -> Result<String, AppError> {
        validate_original_url(original_url)?;

        if !(MIN_TOKEN_LENGTH..=MAX_TOKEN_LENGTH).contains(&length) {
            return Err(AppError::bad_request(
                "Length must be between 5 and 1000",
                json!({ "length": length }),
            ));
        }

        let description = format!("Generated secure URL with {length}-character string.");

        for attempt in 1..=MAX_UPSERT_ATTEMPTS {
            let token = self.token_generator.generate(length);
            let expanded_url = format!("{}/{}", self.base_url, token);

            match self
                .repository
                .upsert(original_url, &expanded_url, &description)
                .await
            {
                Ok(link) => return Ok(link.expanded_url),
                Err(AppError::Conflict { .. }) => {
                    tracing::debug!(attempt, length, "expanded URL collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::exhausted(
            "Failed to generate a unique expanded URL",
            json!({ "attempts": MAX_UPSERT_ATTEMPTS }),
        ))
    }
}

/// Checks that the original URL parses and uses an http(s) scheme.
fn validate_original_url(original_url: &str) -> Result<(), AppError> {
    let parsed = Url::parse(original_url).map_err(|e| {
        AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::bad_request(
            "URL must use http or https",
            json!({ "scheme": parsed.scheme() }),
        ));
    }

    Ok(())
}
