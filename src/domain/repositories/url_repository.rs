//! Repository trait for short URL data access.

use crate::domain::entities::ShortUrl;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `urls` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `short_id` already exists.
    /// Returns [`AppError::Internal`] on other database errors.
    async fn create(&self, short_url: ShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a mapping by its short identifier.
    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Lists every mapping in the store's natural scan order.
    async fn list(&self) -> Result<Vec<ShortUrl>, AppError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<i64, AppError>;
}
