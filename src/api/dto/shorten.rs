//! DTOs for the shortener endpoints.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    ///
    /// Must be an absolute URL that can be sent back verbatim in a `Location`
    /// header.
    #[validate(
        url(message = "Invalid URL format"),
        custom(function = "validate_no_control_chars")
    )]
    pub url: String,
}

/// Rejects control characters.
///
/// `Url::parse` drops tabs and newlines before parsing, so such input passes
/// the URL check but cannot be stored in a header value.
fn validate_no_control_chars(url: &str) -> Result<(), ValidationError> {
    if url.chars().any(char::is_control) {
        return Err(ValidationError::new("control_characters")
            .with_message("URL must not contain control characters".into()));
    }
    Ok(())
}

/// Response carrying the derived short identifier.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_url_passes() {
        let req = ShortenRequest {
            url: "https://example.com/path?q=1".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_schemeless_url_fails() {
        let req = ShortenRequest {
            url: "example.com".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_url_with_newline_fails() {
        let req = ShortenRequest {
            url: "https://example.com/a\nb".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_url_with_tab_fails() {
        let req = ShortenRequest {
            url: "https://example.com/\tpath".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_invalid_url_fails() {
        let req = ShortenRequest {
            url: "not a url".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
