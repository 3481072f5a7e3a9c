//! Application layer services implementing business logic.
//!
//! Services consume the repository traits from the domain layer and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::expand_service::ExpandService`] - expanded URL creation with collision retry
//! - [`services::redirect_service::RedirectService`] - token resolution for redirects

pub mod services;
