#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use url_expander::application::services::{ExpandService, RedirectService};
use url_expander::domain::entities::Link;
use url_expander::domain::repositories::LinkRepository;
use url_expander::error::AppError;
use url_expander::state::AppState;
use url_expander::utils::{AlphanumericTokenGenerator, TokenGenerator};

pub const BASE_URL: &str = "https://wrap.example.com";

/// In-memory implementation of the link store contract.
///
/// Mirrors the Postgres semantics the services rely on: upsert keyed on
/// `original_url`, with a uniqueness check on `expanded_url` that rejects a
/// clash with a different link instead of overwriting it.
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<Link>>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    pub fn expanded_urls(&self) -> Vec<String> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .map(|l| l.expanded_url.clone())
            .collect()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_by_original(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.lock().unwrap();
        Ok(links
            .iter()
            .find(|l| l.original_url == original_url)
            .cloned())
    }

    async fn find_by_expanded(&self, expanded_url: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.lock().unwrap();
        Ok(links
            .iter()
            .find(|l| l.expanded_url == expanded_url)
            .cloned())
    }

    async fn upsert(
        &self,
        original_url: &str,
        expanded_url: &str,
        description: &str,
    ) -> Result<Link, AppError> {
        let mut links = self.links.lock().unwrap();

        if links
            .iter()
            .any(|l| l.expanded_url == expanded_url && l.original_url != original_url)
        {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "links_expanded_url_key" }),
            ));
        }

        let now = Utc::now();

        if let Some(existing) = links.iter_mut().find(|l| l.original_url == original_url) {
            existing.expanded_url = expanded_url.to_string();
            existing.description = description.to_string();
            existing.updated_at = now;
            return Ok(existing.clone());
        }

        let link = Link::new(
            self.next_id.fetch_add(1, Ordering::SeqCst),
            original_url.to_string(),
            expanded_url.to_string(),
            description.to_string(),
            now,
            now,
        );
        links.push(link.clone());
        Ok(link)
    }
}

/// Token generator that replays a fixed sequence, repeating the final entry
/// once exhausted. Used to force collisions deterministically.
pub struct SequenceTokenGenerator {
    tokens: Vec<String>,
    calls: AtomicUsize,
}

impl SequenceTokenGenerator {
    pub fn new(tokens: &[&str]) -> Self {
        Self {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl TokenGenerator for SequenceTokenGenerator {
    fn generate(&self, _length: usize) -> String {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.tokens[call.min(self.tokens.len() - 1)].clone()
    }
}

pub fn create_test_state_with_generator(
    generator: Arc<dyn TokenGenerator>,
) -> (AppState, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let repo_dyn: Arc<dyn LinkRepository> = repository.clone();

    let expand_service = Arc::new(ExpandService::new(repo_dyn.clone(), generator, BASE_URL));
    let redirect_service = Arc::new(RedirectService::new(repo_dyn, BASE_URL));

    (
        AppState::new(expand_service, redirect_service),
        repository,
    )
}

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    create_test_state_with_generator(Arc::new(AlphanumericTokenGenerator))
}
