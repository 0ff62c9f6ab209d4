//! To-do item CRUD service.

use std::sync::Arc;

use crate::domain::entities::{TodoFields, TodoItem};
use crate::domain::repositories::ItemRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for creating, reading, replacing and deleting to-do items.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Creates a new item service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Inserts a new item and returns it with its assigned id.
    pub async fn create(&self, fields: TodoFields) -> Result<TodoItem, AppError> {
        let item = self.repository.create(fields).await?;
        tracing::info!(id = item.id, "Item created");
        Ok(item)
    }

    /// Returns every stored item.
    pub async fn list(&self) -> Result<Vec<TodoItem>, AppError> {
        self.repository.list().await
    }

    /// Retrieves an item by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id.
    pub async fn get(&self, id: i64) -> Result<TodoItem, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| item_not_found(id))
    }

    /// Overwrites title, description and completion state of an item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id; nothing is created.
    pub async fn replace(&self, id: i64, fields: TodoFields) -> Result<TodoItem, AppError> {
        let item = self
            .repository
            .replace(id, fields)
            .await?
            .ok_or_else(|| item_not_found(id))?;

        tracing::info!(id, "Item replaced");
        Ok(item)
    }

    /// Deletes an item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(item_not_found(id));
        }

        tracing::info!(id, "Item deleted");
        Ok(())
    }

    /// Counts stored items.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn item_not_found(id: i64) -> AppError {
    AppError::not_found("Item not found", json!({ "id": id }))
}
