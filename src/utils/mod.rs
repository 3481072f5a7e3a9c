//! Utility functions shared across the application.
//!
//! - [`token_generator`] - Random token generation for expanded URLs

pub mod token_generator;

pub use token_generator::{
    AlphanumericTokenGenerator, MAX_TOKEN_LENGTH, MIN_TOKEN_LENGTH, TokenGenerator,
};

#[cfg(test)]
pub use token_generator::MockTokenGenerator;
