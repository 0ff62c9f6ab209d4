//! Short URL creation and lookup service.

use std::sync::Arc;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::short_id::derive_short_id;
use serde_json::json;

/// Service for shortening URLs and resolving short identifiers.
///
/// Identifiers are derived from the URL content; there is no uniqueness check
/// before insert, so re-shortening a URL fails with [`AppError::Conflict`].
pub struct UrlService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> UrlService<R> {
    /// Creates a new URL service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Derives the short identifier for `full_url` and stores the mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the identifier is already stored,
    /// whether by the same URL or by a colliding one.
    pub async fn shorten(&self, full_url: String) -> Result<ShortUrl, AppError> {
        let short_id = derive_short_id(&full_url);

        match self
            .repository
            .create(ShortUrl::new(short_id.clone(), full_url))
            .await
        {
            Ok(created) => {
                tracing::info!(short_id = %created.short_id, "Short URL created");
                Ok(created)
            }
            Err(err @ AppError::Conflict { .. }) => {
                tracing::warn!(short_id = %short_id, "Short id already exists");
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Returns every stored mapping.
    pub async fn list(&self) -> Result<Vec<ShortUrl>, AppError> {
        self.repository.list().await
    }

    /// Looks up the mapping for `short_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] with detail "URL not found" on a miss.
    pub async fn resolve(&self, short_id: &str) -> Result<ShortUrl, AppError> {
        let found = self.repository.find_by_short_id(short_id).await?;
        tracing::debug!(short_id, hit = found.is_some(), "Short URL lookup");

        found.ok_or_else(|| AppError::not_found("URL not found", json!({ "short_id": short_id })))
    }

    /// Counts stored mappings.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;

    #[tokio::test]
    async fn test_shorten_stores_derived_id() {
        let mut mock_repo = MockUrlRepository::new();
        let expected_id = derive_short_id("https://example.com");

        let id = expected_id.clone();
        mock_repo
            .expect_create()
            .withf(move |url| url.short_id == id && url.full_url == "https://example.com")
            .times(1)
            .returning(Ok);

        let service = UrlService::new(Arc::new(mock_repo));

        let created = service
            .shorten("https://example.com".to_string())
            .await
            .unwrap();

        assert_eq!(created.short_id, expected_id);
        assert_eq!(created.full_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_shorten_propagates_conflict() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::conflict("Unique constraint violation", json!({}))));

        let service = UrlService::new(Arc::new(mock_repo));

        let result = service.shorten("https://example.com".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_resolve_hit() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_find_by_short_id()
            .withf(|id| id == "abc123")
            .times(1)
            .returning(|_| Ok(Some(ShortUrl::new("abc123", "https://example.com"))));

        let service = UrlService::new(Arc::new(mock_repo));

        let found = service.resolve("abc123").await.unwrap();
        assert_eq!(found.full_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_miss_is_not_found() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_find_by_short_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UrlService::new(Arc::new(mock_repo));

        let err = service.resolve("zzzzzz").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.to_string(), "URL not found");
    }

    #[tokio::test]
    async fn test_list_passes_through() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_list().times(1).returning(|| {
            Ok(vec![
                ShortUrl::new("aaaaaa", "https://a.example"),
                ShortUrl::new("bbbbbb", "https://b.example"),
            ])
        });

        let service = UrlService::new(Arc::new(mock_repo));

        let urls = service.list().await.unwrap();
        assert_eq!(urls.len(), 2);
        assert_eq!(urls[1].short_id, "bbbbbb");
    }
}
