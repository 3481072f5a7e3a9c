//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, service wiring, and Axum server
//! lifecycle.

use crate::application::services::{ExpandService, RedirectService};
use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::PgLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::AlphanumericTokenGenerator;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Embedded migrations
/// - Link repository and services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let link_repository: Arc<dyn LinkRepository> =
        Arc::new(PgLinkRepository::new(Arc::new(pool)));

    let expand_service = Arc::new(ExpandService::new(
        link_repository.clone(),
        Arc::new(AlphanumericTokenGenerator),
        &config.base_url,
    ));
    let redirect_service = Arc::new(RedirectService::new(link_repository, &config.base_url));

    let state = AppState::new(expand_service, redirect_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
