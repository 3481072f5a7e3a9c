//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for link storage and retrieval.
///
/// Upserts are keyed on `original_url` via `ON CONFLICT DO UPDATE`; a clash
/// on the `expanded_url` unique index is still raised as a unique violation
/// and mapped to [`AppError::Conflict`] for the caller's retry loop.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    original_url: String,
    expanded_url: String,
    description: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.original_url,
            row.expanded_url,
            row.description,
            row.created_at,
            row.updated_at,
        )
    }
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_original(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let row: Option<LinkRow> = sqlx::query_as(
            r#"
            SELECT id, original_url, expanded_url, description, created_at, updated_at
            FROM links
            WHERE original_url = $1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_expanded(&self, expanded_url: &str) -> Result<Option<Link>, AppError> {
        let row: Option<LinkRow> = sqlx::query_as(
            r#"
            SELECT id, original_url, expanded_url, description, created_at, updated_at
            FROM links
            WHERE expanded_url = $1
            "#,
        )
        .bind(expanded_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn upsert(
        &self,
        original_url: &str,
        expanded_url: &str,
        description: &str,
    ) -> Result<Link, AppError> {
        let row: LinkRow = sqlx::query_as(
            r#"
            INSERT INTO links (original_url, expanded_url, description)
            VALUES ($1, $2, $3)
            ON CONFLICT (original_url) DO UPDATE
            SET expanded_url = EXCLUDED.expanded_url,
                description = EXCLUDED.description,
                updated_at = NOW()
            RETURNING id, original_url, expanded_url, description, created_at, updated_at
            "#,
        )
        .bind(original_url)
        .bind(expanded_url)
        .bind(description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Link::from(row))
    }
}
