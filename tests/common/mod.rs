#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use url_todo::config::ServiceKind;
use url_todo::infrastructure::persistence::init_schema;
use url_todo::routes::{shortener_app, todo_app};
use url_todo::state::{ShortenerState, TodoState};

/// Opens a fresh in-memory database.
///
/// A single connection that never expires keeps the in-memory database alive
/// for the whole test.
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

pub async fn shortener_pool() -> SqlitePool {
    let pool = memory_pool().await;
    init_schema(&pool, ServiceKind::Shortener).await.unwrap();
    pool
}

pub async fn todo_pool() -> SqlitePool {
    let pool = memory_pool().await;
    init_schema(&pool, ServiceKind::Todo).await.unwrap();
    pool
}

/// Serves the shortener the same way `server::run` does, trailing slash
/// normalization included.
pub fn shortener_server(pool: SqlitePool) -> TestServer {
    let app = shortener_app(ShortenerState::new(pool));
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub fn todo_server(pool: SqlitePool) -> TestServer {
    let app = todo_app(TodoState::new(pool));
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}

pub async fn create_test_url(pool: &SqlitePool, short_id: &str, full_url: &str) {
    sqlx::query("INSERT INTO urls (short_id, full_url) VALUES (?, ?)")
        .bind(short_id)
        .bind(full_url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_item(pool: &SqlitePool, title: &str, completed: bool) -> i64 {
    sqlx::query_scalar("INSERT INTO items (title, completed) VALUES (?, ?) RETURNING id")
        .bind(title)
        .bind(completed)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_items(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM items")
        .fetch_one(pool)
        .await
        .unwrap()
}
