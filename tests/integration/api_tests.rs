//! API integration tests

use std::sync::Arc;

use reqwest::Client;
use serde_json::{json, Value};

use ezma_catalog::{
    api,
    config::{AppConfig, CatalogConfig},
    services::source::HttpCatalogClient,
    AppState,
};

use crate::upstream;

/// Start the service against `upstream_url` and return its API base URL
async fn spawn_app(upstream_url: String) -> String {
    let config = AppConfig {
        catalog: CatalogConfig {
            base_url: upstream_url,
            timeout_secs: 5,
        },
        ..AppConfig::default()
    };

    let source = HttpCatalogClient::new(&config.catalog).expect("Failed to build client");
    let app = api::router(AppState::new(config, Arc::new(source)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind app");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("App crashed");
    });

    format!("http://{}/api/v1", addr)
}

async fn get_json(client: &Client, url: String) -> (u16, Value) {
    let response = client.get(url).send().await.expect("Failed to send request");
    let status = response.status().as_u16();
    let body = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

fn ids(body: &Value, key: &str) -> Vec<i64> {
    body[key]
        .as_array()
        .expect("Expected an array")
        .iter()
        .map(|record| record["id"].as_i64().expect("Record without id"))
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_app(upstream::spawn().await).await;
    let (status, body) = get_json(&Client::new(), format!("{}/health", base)).await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_reflects_upstream() {
    let client = Client::new();

    let base = spawn_app(upstream::spawn().await).await;
    let (status, body) = get_json(&client, format!("{}/ready", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["upstream"], true);

    let base = spawn_app(upstream::unreachable().await).await;
    let (status, body) = get_json(&client, format!("{}/ready", base)).await;
    assert_eq!(status, 503);
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn test_list_books_default_order() {
    let base = spawn_app(upstream::spawn().await).await;
    let (status, body) = get_json(&Client::new(), format!("{}/books", base)).await;

    assert_eq!(status, 200);
    // malformed and nameless records are left out
    assert_eq!(ids(&body, "items"), vec![3, 1, 2, 4]);
    assert_eq!(body["total"], 4);
    // unknown upstream fields pass through
    assert_eq!(body["items"][1]["isbn"], "978-9943-01-234-5");
}

#[tokio::test]
async fn test_list_books_search_and_sort() {
    let client = Client::new();
    let base = spawn_app(upstream::spawn().await).await;

    let (_, body) = get_json(&client, format!("{}/books?search=QODIRIY&sort=count-desc", base)).await;
    assert_eq!(ids(&body, "items"), vec![3, 1]);

    let (_, body) = get_json(&client, format!("{}/books?only_available=true", base)).await;
    assert_eq!(ids(&body, "items"), vec![3, 1, 4]);

    let (_, body) = get_json(&client, format!("{}/books?search=%20%20", base)).await;
    assert_eq!(body["total"], 4);

    let (_, body) = get_json(&client, format!("{}/books?search=%D1%9E%D1%82%D0%BA%D0%B0%D0%BD", base)).await;
    assert_eq!(ids(&body, "items"), vec![4]);
}

#[tokio::test]
async fn test_list_books_rejects_unknown_sort() {
    let client = Client::new();
    let base = spawn_app(upstream::spawn().await).await;

    let (status, body) = get_json(&client, format!("{}/books?sort=price-asc", base)).await;
    assert_eq!(status, 400);
    assert_eq!(body["code"], 3);
    assert_eq!(body["error"], "BadValue");

    let (status, body) = get_json(&client, format!("{}/libraries?only_available=maybe", base)).await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_list_libraries() {
    let client = Client::new();
    let base = spawn_app(upstream::spawn().await).await;

    let (status, body) = get_json(&client, format!("{}/libraries?sort=books-desc", base)).await;
    assert_eq!(status, 200);
    assert_eq!(ids(&body, "items"), vec![14, 15, 10, 13]);

    let (_, body) = get_json(&client, format!("{}/libraries?only_available=true", base)).await;
    assert_eq!(ids(&body, "items"), vec![10, 14, 15]);

    let (_, body) = get_json(&client, format!("{}/libraries?search=AZ", base)).await;
    assert_eq!(ids(&body, "items"), vec![13]);
}

#[tokio::test]
async fn test_book_detail() {
    let base = spawn_app(upstream::spawn().await).await;
    let (status, body) = get_json(&Client::new(), format!("{}/books/1", base)).await;

    assert_eq!(status, 200);
    assert_eq!(body["book"]["name"], "O'tkan kunlar");
    // library 11 answers HTML and 12 does not exist
    assert_eq!(ids(&body, "libraries"), vec![10]);
    assert_eq!(ids(&body, "related"), vec![2, 3, 4, 6]);
}

#[tokio::test]
async fn test_book_not_found() {
    let base = spawn_app(upstream::spawn().await).await;
    let (status, body) = get_json(&Client::new(), format!("{}/books/404", base)).await;

    assert_eq!(status, 404);
    assert_eq!(body["error"], "NoSuchData");
}

#[tokio::test]
async fn test_library_detail() {
    let base = spawn_app(upstream::spawn().await).await;
    let (status, body) =
        get_json(&Client::new(), format!("{}/libraries/10?sort=count-desc", base)).await;

    assert_eq!(status, 200);
    assert_eq!(body["library"]["telegram"], "@telegram.org");
    assert_eq!(ids(&body, "books"), vec![3, 1, 2]);
    assert_eq!(
        body["top_categories"],
        json!([
            { "category": "Roman", "count": 2 },
            { "category": "Qissa", "count": 1 }
        ])
    );
}

#[tokio::test]
async fn test_library_not_found() {
    let base = spawn_app(upstream::spawn().await).await;
    let (status, body) = get_json(&Client::new(), format!("{}/libraries/999", base)).await;

    assert_eq!(status, 404);
    assert_eq!(body["code"], 2);
    assert_eq!(body["error"], "NoSuchData");
}

#[tokio::test]
async fn test_upstream_down() {
    let base = spawn_app(upstream::unreachable().await).await;
    let (status, body) = get_json(&Client::new(), format!("{}/libraries", base)).await;

    assert_eq!(status, 502);
    assert_eq!(body["error"], "UpstreamFailure");
}

#[tokio::test]
async fn test_theme_preference() {
    let client = Client::new();
    let base = spawn_app(upstream::spawn().await).await;

    let (_, body) = get_json(&client, format!("{}/preferences/theme", base)).await;
    assert_eq!(body["theme"], "light");

    let response = client
        .put(format!("{}/preferences/theme", base))
        .json(&json!({ "theme": "dark" }))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["theme"], "dark");

    let response = client
        .post(format!("{}/preferences/theme/toggle", base))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["theme"], "light");

    let response = client
        .put(format!("{}/preferences/theme", base))
        .json(&json!({ "theme": "sepia" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn test_openapi_document() {
    let base = spawn_app(upstream::spawn().await).await;
    let root = base.trim_end_matches("/api/v1");
    let (status, body) = get_json(&Client::new(), format!("{}/api-docs/openapi.json", root)).await;

    assert_eq!(status, 200);
    assert!(body["paths"]["/books"].is_object());
}
