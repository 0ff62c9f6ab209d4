//! Deterministic short identifier derivation.
//!
//! The identifier is the first [`SHORT_ID_LENGTH`] hex characters of the
//! SHA-256 digest of the URL's UTF-8 bytes. It is a pure function of the input:
//! the same URL always yields the same identifier. 24 bits leave collisions
//! likely at scale; they surface as insert conflicts.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest.
pub const SHORT_ID_LENGTH: usize = 6;

/// Derives the short identifier for `url`.
///
/// # Examples
///
/// ```ignore
/// let id = derive_short_id("https://example.com");
/// assert_eq!(id.len(), 6);
/// assert_eq!(id, derive_short_id("https://example.com"));
/// ```
pub fn derive_short_id(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut encoded = hex::encode(digest);
    encoded.truncate(SHORT_ID_LENGTH);
    encoded
}
