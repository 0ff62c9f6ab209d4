mod common;

use serde_json::{Value, json};
use url_todo::utils::short_id::derive_short_id;

#[tokio::test]
async fn test_shorten_returns_derived_id() {
    let pool = common::shortener_pool().await;
    let server = common::shortener_server(pool.clone());

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json, json!({ "short_id": derive_short_id("https://example.com") }));

    let stored: String = sqlx::query_scalar("SELECT full_url FROM urls WHERE short_id = ?")
        .bind(derive_short_id("https://example.com"))
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "https://example.com");
}

#[tokio::test]
async fn test_shorten_same_url_twice_fails_with_server_error() {
    let pool = common::shortener_pool().await;
    let server = common::shortener_server(pool);

    let first = server
        .post("/shorten")
        .json(&json!({ "url": "https://dup.example.com" }))
        .await;
    first.assert_status_ok();
    let first_id = first.json::<Value>()["short_id"].clone();

    let second = server
        .post("/shorten")
        .json(&json!({ "url": "https://dup.example.com" }))
        .await;

    assert_eq!(second.status_code(), 500);
    assert_eq!(second.json::<Value>()["code"], "conflict");
    assert_eq!(first_id, json!(derive_short_id("https://dup.example.com")));
}

#[tokio::test]
async fn test_shorten_invalid_url() {
    let pool = common::shortener_pool().await;
    let server = common::shortener_server(pool);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_url_with_control_characters_is_rejected() {
    let pool = common::shortener_pool().await;
    let server = common::shortener_server(pool);

    for url in ["https://example.com/a\nb", "https://example.com/\tx"] {
        let response = server.post("/shorten").json(&json!({ "url": url })).await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["code"], "validation_error");
    }

    let listed = server.get("/list_urls").await;
    assert!(listed.json::<Vec<Value>>().is_empty());
}

#[tokio::test]
async fn test_shorten_missing_field_is_rejected() {
    let pool = common::shortener_pool().await;
    let server = common::shortener_server(pool);

    let response = server.post("/shorten").json(&json!({})).await;

    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn test_list_urls() {
    let pool = common::shortener_pool().await;
    common::create_test_url(&pool, "aaaaaa", "https://a.example").await;
    common::create_test_url(&pool, "bbbbbb", "https://b.example").await;
    let server = common::shortener_server(pool);

    let response = server.get("/list_urls").await;

    response.assert_status_ok();

    let mut urls = response.json::<Vec<Value>>();
    urls.sort_by(|a, b| a["short_id"].as_str().cmp(&b["short_id"].as_str()));
    assert_eq!(
        urls,
        vec![
            json!({ "short_id": "aaaaaa", "full_url": "https://a.example" }),
            json!({ "short_id": "bbbbbb", "full_url": "https://b.example" }),
        ]
    );
}

#[tokio::test]
async fn test_list_urls_empty() {
    let pool = common::shortener_pool().await;
    let server = common::shortener_server(pool);

    let response = server.get("/list_urls").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}
