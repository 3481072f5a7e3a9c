//! Redirect resolution service.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use serde_json::json;

/// Service that resolves an expanded-URL token back to its original URL.
///
/// Read-only and idempotent: resolving never mutates the store and is safe
/// to call concurrently with expand requests.
pub struct RedirectService {
    repository: Arc<dyn LinkRepository>,
    base_url: String,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<dyn LinkRepository>, base_url: &str) -> Self {
        Self {
            repository,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Looks up the original URL behind `token`.
    ///
    /// Reconstructs `base_url + "/" + token` and queries the store by
    /// expanded URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the token.
    /// Returns [`AppError::Unavailable`] on database errors.
    pub async fn resolve(&self, token: &str) -> Result<String, AppError> {
        let expanded_url = format!("{}/{}", self.base_url, token);

        self.repository
            .find_by_expanded(&expanded_url)
            .await?
            .map(|link| link.original_url)
            .ok_or_else(|| {
                AppError::not_found("No link for this address", json!({ "token": token }))
            })
    }
}
