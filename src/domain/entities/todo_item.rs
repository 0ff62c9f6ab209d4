//! To-do item entity.

use serde::Serialize;

/// A persisted to-do item. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct TodoItem {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Mutable fields of a to-do item.
///
/// Used both for inserts and for full replacement; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFields {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl TodoFields {
    /// Attaches a store-assigned id to these fields.
    pub fn into_item(self, id: i64) -> TodoItem {
        TodoItem {
            id,
            title: self.title,
            description: self.description,
            completed: self.completed,
        }
    }
}
