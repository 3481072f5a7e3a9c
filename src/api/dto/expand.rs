//! DTOs for the URL expansion endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to expand a URL into a randomized redirect alias.
#[derive(Debug, Deserialize, Validate)]
pub struct ExpandRequest {
    /// The original URL to wrap (must be valid HTTP/HTTPS).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Requested token length in characters.
    #[validate(range(min = 5, max = 1000, message = "Length must be between 5 and 1000"))]
    pub length: u32,
}

/// Response carrying the freshly generated expanded URL.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandResponse {
    pub expanded_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes_validation() {
        let request = ExpandRequest {
            url: "https://example.com/article".to_string(),
            length: 10,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_invalid_url_fails_validation() {
        let request = ExpandRequest {
            url: "not-a-url".to_string(),
            length: 10,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_length_out_of_range_fails_validation() {
        let too_short = ExpandRequest {
            url: "https://example.com".to_string(),
            length: 4,
        };
        assert!(too_short.validate().is_err());

        let too_long = ExpandRequest {
            url: "https://example.com".to_string(),
            length: 1001,
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let response = ExpandResponse {
            expanded_url: "https://wrap.example.com/tok5A".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["expandedUrl"], "https://wrap.example.com/tok5A");
    }
}
