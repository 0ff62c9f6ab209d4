//! Repository trait for to-do item data access.

use crate::domain::entities::{TodoFields, TodoItem};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the `items` table.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteItemRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Inserts a new item; the store assigns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, fields: TodoFields) -> Result<TodoItem, AppError>;

    /// Lists every item in the store's natural scan order.
    async fn list(&self) -> Result<Vec<TodoItem>, AppError>;

    /// Finds an item by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<TodoItem>, AppError>;

    /// Overwrites all mutable fields of the item with `id`.
    ///
    /// Returns `Ok(None)` if no row matched; no row is created in that case.
    async fn replace(&self, id: i64, fields: TodoFields) -> Result<Option<TodoItem>, AppError>;

    /// Deletes the item with `id`.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if none matched.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored items.
    async fn count(&self) -> Result<i64, AppError>;
}
