mod common;

use url_todo::config::ServiceKind;
use url_todo::infrastructure::persistence::init_schema;

#[tokio::test]
async fn test_init_schema_is_idempotent() {
    let pool = common::memory_pool().await;

    init_schema(&pool, ServiceKind::Todo).await.unwrap();
    common::create_test_item(&pool, "Survives restart", false).await;

    init_schema(&pool, ServiceKind::Todo).await.unwrap();

    assert_eq!(common::count_items(&pool).await, 1);
}

#[tokio::test]
async fn test_init_schema_accepts_prepopulated_store() {
    let pool = common::memory_pool().await;

    sqlx::query("CREATE TABLE urls (short_id TEXT PRIMARY KEY, full_url TEXT NOT NULL)")
        .execute(&pool)
        .await
        .unwrap();
    common::create_test_url(&pool, "legacy", "https://legacy.example").await;

    init_schema(&pool, ServiceKind::Shortener).await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_both_services_can_share_a_store() {
    let pool = common::memory_pool().await;

    init_schema(&pool, ServiceKind::Shortener).await.unwrap();
    init_schema(&pool, ServiceKind::Todo).await.unwrap();
    init_schema(&pool, ServiceKind::Shortener).await.unwrap();

    common::create_test_url(&pool, "abc123", "https://example.com").await;
    common::create_test_item(&pool, "Shared", false).await;
    assert_eq!(common::count_items(&pool).await, 1);
}
