//! HTTP request handlers for API endpoints.

pub mod expand;
pub mod health;
pub mod redirect;

pub use expand::expand_handler;
pub use health::health_handler;
pub use redirect::redirect_handler;
