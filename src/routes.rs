//! Top-level routers for each service.
//!
//! Every router carries the request tracing layer. The `*_app` constructors
//! additionally wrap the router in trailing slash normalization, which has to
//! run before routing and therefore sits outside the [`Router`].

use crate::api::middleware::tracing;
use crate::api::routes::{shortener_routes, todo_routes};
use crate::state::{ShortenerState, TodoState};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the shortener application router.
pub fn shortener_router(state: ShortenerState) -> Router {
    shortener_routes()
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the to-do application router.
pub fn todo_router(state: TodoState) -> Router {
    todo_routes().with_state(state).layer(tracing::layer())
}

/// The shortener service as served: `/stats/abc123/` routes like `/stats/abc123`.
pub fn shortener_app(state: ShortenerState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(shortener_router(state))
}

/// The to-do service as served: `/items/1/` routes like `/items/1`.
pub fn todo_app(state: TodoState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(todo_router(state))
}
