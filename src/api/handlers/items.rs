//! Handlers for to-do item endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::item::{DetailResponse, ItemPayload};
use crate::domain::entities::TodoItem;
use crate::error::AppError;
use crate::state::TodoState;

/// Creates an item.
///
/// # Endpoint
///
/// `POST /items`
///
/// # Request Body
///
/// ```json
/// { "title": "Buy milk", "description": "2 litres", "completed": false }
/// ```
///
/// `description` defaults to `null`, `completed` to `false`. The response is
/// the stored item including its assigned `id`.
pub async fn create_item_handler(
    State(state): State<TodoState>,
    Json(payload): Json<ItemPayload>,
) -> Result<Json<TodoItem>, AppError> {
    let item = state.item_service.create(payload.into()).await?;
    Ok(Json(item))
}

/// Lists every item.
///
/// # Endpoint
///
/// `GET /items`
pub async fn list_items_handler(
    State(state): State<TodoState>,
) -> Result<Json<Vec<TodoItem>>, AppError> {
    let items = state.item_service.list().await?;
    Ok(Json(items))
}

/// Returns one item.
///
/// # Endpoint
///
/// `GET /items/{id}`
///
/// # Errors
///
/// Returns 404 Not Found with detail "Item not found".
pub async fn get_item_handler(
    State(state): State<TodoState>,
    Path(id): Path<i64>,
) -> Result<Json<TodoItem>, AppError> {
    let item = state.item_service.get(id).await?;
    Ok(Json(item))
}

/// Replaces all mutable fields of an item.
///
/// # Endpoint
///
/// `PUT /items/{id}`
///
/// Fields missing from the body are reset to their defaults. The path id is
/// echoed back; an `id` in the body is ignored.
///
/// # Errors
///
/// Returns 404 Not Found if no item has this id. No item is created.
pub async fn update_item_handler(
    State(state): State<TodoState>,
    Path(id): Path<i64>,
    Json(payload): Json<ItemPayload>,
) -> Result<Json<TodoItem>, AppError> {
    let item = state.item_service.replace(id, payload.into()).await?;
    Ok(Json(item))
}

/// Deletes an item.
///
/// # Endpoint
///
/// `DELETE /items/{id}`
///
/// # Response
///
/// ```json
/// { "detail": "Item deleted" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if no item has this id.
pub async fn delete_item_handler(
    State(state): State<TodoState>,
    Path(id): Path<i64>,
) -> Result<Json<DetailResponse>, AppError> {
    state.item_service.delete(id).await?;
    Ok(Json(DetailResponse {
        detail: "Item deleted",
    }))
}
