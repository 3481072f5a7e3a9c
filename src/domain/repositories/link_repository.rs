//! Repository trait for link data access.

use crate::domain::entities::Link;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for persisting original-to-expanded URL mappings.
///
/// The store enforces two uniqueness constraints: one link per
/// `original_url`, and globally unique `expanded_url` values.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`; integration tests use an
///   in-memory fake (`tests/common/mod.rs`)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by the original destination URL.
    ///
    /// Used to check whether a destination already has an expanded alias.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on database errors.
    async fn find_by_original(&self, original_url: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its full expanded URL.
    ///
    /// This is the redirect lookup path; read-only and safe to call
    /// concurrently with writers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] on database errors.
    async fn find_by_expanded(&self, expanded_url: &str) -> Result<Option<Link>, AppError>;

    /// Inserts a link, or replaces the `expanded_url` and `description` of
    /// the existing link for this `original_url` and bumps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `expanded_url` collides with a
    /// *different* link. The caller decides whether to retry with a fresh
    /// token; the store never overwrites another link's alias silently.
    ///
    /// Returns [`AppError::Unavailable`] on database errors.
    async fn upsert(
        &self,
        original_url: &str,
        expanded_url: &str,
        description: &str,
    ) -> Result<Link, AppError>;
}
