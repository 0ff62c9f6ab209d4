//! SQLite implementation of the short URL repository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// SQLite repository for the `urls` table.
///
/// Every statement borrows a pooled connection for its duration only.
#[derive(Clone)]
pub struct SqliteUrlRepository {
    pool: SqlitePool,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn create(&self, short_url: ShortUrl) -> Result<ShortUrl, AppError> {
        sqlx::query("INSERT INTO urls (short_id, full_url) VALUES (?, ?)")
            .bind(&short_url.short_id)
            .bind(&short_url.full_url)
            .execute(&self.pool)
            .await?;

        Ok(short_url)
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortUrl>(
            "SELECT short_id, full_url FROM urls WHERE short_id = ?",
        )
        .bind(short_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list(&self) -> Result<Vec<ShortUrl>, AppError> {
        let rows = sqlx::query_as::<_, ShortUrl>("SELECT short_id, full_url FROM urls")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
