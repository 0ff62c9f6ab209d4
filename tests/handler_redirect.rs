mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::shortener_pool().await;
    common::create_test_url(&pool, "abc123", "https://example.com/target").await;
    let server = common::shortener_server(pool);

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 307);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let pool = common::shortener_pool().await;
    let server = common::shortener_server(pool);

    let response = server.get("/zzzzzz").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["detail"], "URL not found");
}

#[tokio::test]
async fn test_shorten_then_redirect() {
    let pool = common::shortener_pool().await;
    let server = common::shortener_server(pool);

    let created = server
        .post("/shorten")
        .json(&json!({ "url": "https://www.rust-lang.org/learn?x=1" }))
        .await;
    created.assert_status_ok();
    let short_id = created.json::<Value>()["short_id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = server.get(&format!("/{short_id}")).await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(
        response.header("location"),
        "https://www.rust-lang.org/learn?x=1"
    );
}

#[tokio::test]
async fn test_stats_returns_mapping() {
    let pool = common::shortener_pool().await;
    common::create_test_url(&pool, "abc123", "https://example.com").await;
    let server = common::shortener_server(pool);

    let response = server.get("/stats/abc123").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "short_id": "abc123", "full_url": "https://example.com" })
    );
}

#[tokio::test]
async fn test_stats_not_found() {
    let pool = common::shortener_pool().await;
    let server = common::shortener_server(pool);

    let response = server.get("/stats/zzzzzz").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["detail"], "URL not found");
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let pool = common::shortener_pool().await;
    common::create_test_url(&pool, "abc123", "https://example.com").await;
    let server = common::shortener_server(pool);

    let stats = server.get("/stats/abc123/").await;
    stats.assert_status_ok();
    assert_eq!(
        stats.json::<Value>(),
        json!({ "short_id": "abc123", "full_url": "https://example.com" })
    );

    let redirect = server.get("/abc123/").await;
    assert_eq!(redirect.status_code(), 307);
    assert_eq!(redirect.header("location"), "https://example.com");
}
