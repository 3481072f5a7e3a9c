//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{ExpandService, RedirectService};

/// Handler-visible application state.
///
/// Services carry their own repository and base URL references, so the
/// state is a cheap bundle of `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub expand_service: Arc<ExpandService>,
    pub redirect_service: Arc<RedirectService>,
}

impl AppState {
    /// Creates application state from pre-built services.
    pub fn new(
        expand_service: Arc<ExpandService>,
        redirect_service: Arc<RedirectService>,
    ) -> Self {
        Self {
            expand_service,
            redirect_service,
        }
    }
}
