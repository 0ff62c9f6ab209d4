//! SQLite implementation of the to-do item repository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::entities::{TodoFields, TodoItem};
use crate::domain::repositories::ItemRepository;
use crate::error::AppError;

/// SQLite repository for the `items` table.
#[derive(Clone)]
pub struct SqliteItemRepository {
    pool: SqlitePool,
}

impl SqliteItemRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn create(&self, fields: TodoFields) -> Result<TodoItem, AppError> {
        let item = sqlx::query_as::<_, TodoItem>(
            r#"
            INSERT INTO items (title, description, completed)
            VALUES (?, ?, ?)
            RETURNING id, title, description, completed
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.completed)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn list(&self) -> Result<Vec<TodoItem>, AppError> {
        let rows = sqlx::query_as::<_, TodoItem>(
            "SELECT id, title, description, completed FROM items",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>, AppError> {
        let row = sqlx::query_as::<_, TodoItem>(
            "SELECT id, title, description, completed FROM items WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn replace(&self, id: i64, fields: TodoFields) -> Result<Option<TodoItem>, AppError> {
        let row = sqlx::query_as::<_, TodoItem>(
            r#"
            UPDATE items
            SET title = ?, description = ?, completed = ?
            WHERE id = ?
            RETURNING id, title, description, completed
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.completed)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
