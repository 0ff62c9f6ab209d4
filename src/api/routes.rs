//! API route configuration for both services.

use crate::api::handlers::{
    create_item_handler, delete_item_handler, get_item_handler, list_items_handler,
    list_urls_handler, redirect_handler, shorten_handler, shortener_health_handler,
    stats_handler, todo_health_handler, update_item_handler,
};
use crate::state::{ShortenerState, TodoState};
use axum::{
    Router,
    routing::{get, post},
};

/// Shortener routes.
///
/// # Endpoints
///
/// - `POST /shorten`            - Shorten a URL
/// - `GET  /list_urls`          - List all mappings
/// - `GET  /stats/{short_id}`   - Look up one mapping
/// - `GET  /health`             - Health check
/// - `GET  /{short_id}`         - Redirect to the full URL
///
/// Static segments take precedence over `/{short_id}`. Derived ids are hex,
/// so they never shadow `list_urls` or `health`.
pub fn shortener_routes() -> Router<ShortenerState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/list_urls", get(list_urls_handler))
        .route("/stats/{short_id}", get(stats_handler))
        .route("/health", get(shortener_health_handler))
        .route("/{short_id}", get(redirect_handler))
}

/// To-do routes.
///
/// # Endpoints
///
/// - `POST   /items`        - Create an item
/// - `GET    /items`        - List items
/// - `GET    /items/{id}`   - Get one item
/// - `PUT    /items/{id}`   - Replace an item
/// - `DELETE /items/{id}`   - Delete an item
/// - `GET    /health`       - Health check
pub fn todo_routes() -> Router<TodoState> {
    Router::new()
        .route("/items", post(create_item_handler).get(list_items_handler))
        .route(
            "/items/{id}",
            get(get_item_handler)
                .put(update_item_handler)
                .delete(delete_item_handler),
        )
        .route("/health", get(todo_health_handler))
}
