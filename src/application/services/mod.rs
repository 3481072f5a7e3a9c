//! Business logic services for the application layer.

pub mod expand_service;
pub mod redirect_service;

pub use expand_service::ExpandService;
pub use redirect_service::RedirectService;
