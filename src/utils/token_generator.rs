//! Random token generation for expanded URLs.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Minimum accepted token length.
pub const MIN_TOKEN_LENGTH: usize = 5;

/// Maximum accepted token length.
pub const MAX_TOKEN_LENGTH: usize = 1000;

/// Source of random tokens for expanded URLs.
///
/// Modeled as a trait so the expand service can be tested against a
/// deterministic generator that forces collisions. Length validation is the
/// caller's responsibility; implementations produce exactly the requested
/// number of characters.
#[cfg_attr(test, mockall::automock)]
pub trait TokenGenerator: Send + Sync {
    /// Returns a random string of exactly `length` characters drawn from
    /// `[A-Za-z0-9]`.
    fn generate(&self, length: usize) -> String;
}

/// Default generator backed by the thread-local RNG.
///
/// The token only needs to be hard to guess casually, not cryptographically
/// unforgeable; the `Alphanumeric` distribution gives a uniform draw over the
/// 62-character alphabet.
pub struct AlphanumericTokenGenerator;

impl TokenGenerator for AlphanumericTokenGenerator {
    fn generate(&self, length: usize) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_exact_length() {
        let generator = AlphanumericTokenGenerator;

        assert_eq!(generator.generate(MIN_TOKEN_LENGTH).len(), 5);
        assert_eq!(generator.generate(10).len(), 10);
        assert_eq!(generator.generate(MAX_TOKEN_LENGTH).len(), 1000);
    }

    #[test]
    fn test_generate_alphanumeric_only() {
        let generator = AlphanumericTokenGenerator;
        let token = generator.generate(500);

        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_produces_unique_tokens() {
        let generator = AlphanumericTokenGenerator;
        let mut tokens = HashSet::new();

        for _ in 0..1000 {
            tokens.insert(generator.generate(10));
        }

        assert_eq!(tokens.len(), 1000);
    }
}
