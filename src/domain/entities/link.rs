//! Link entity representing an original URL and its expanded alias.

use chrono::{DateTime, Utc};

/// A persisted mapping between an original URL and its expanded redirect URL.
///
/// The original URL is the natural key: each destination has at most one
/// active expanded alias, and re-expanding replaces the previous one.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub expanded_url: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        original_url: String,
        expanded_url: String,
        description: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            expanded_url,
            description,
            created_at,
            updated_at,
        }
    }

    /// Returns the token segment of the expanded URL (everything after the
    /// final `/`), or the whole string when no separator is present.
    pub fn token(&self) -> &str {
        self.expanded_url
            .rsplit('/')
            .next()
            .unwrap_or(&self.expanded_url)
    }
}
