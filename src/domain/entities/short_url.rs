//! Short URL entity: the mapping between a derived identifier and a full URL.

use serde::Serialize;

/// A persisted short URL mapping.
///
/// Records are created once and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ShortUrl {
    pub short_id: String,
    pub full_url: String,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(short_id: impl Into<String>, full_url: impl Into<String>) -> Self {
        Self {
            short_id: short_id.into(),
            full_url: full_url.into(),
        }
    }
}
