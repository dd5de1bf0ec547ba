//! Fake remote catalog API serving fixed fixtures

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

/// Books are served inside a paginated envelope, with one malformed and
/// one nameless entry
pub fn books() -> Value {
    json!({
        "count": 6,
        "next": null,
        "previous": null,
        "results": [
            { "id": 1, "name": "O'tkan kunlar", "author": "Abdulla Qodiriy", "quantity_in_library": 3,
              "libraries": [10, 11, 12], "category": "Roman", "isbn": "978-9943-01-234-5" },
            { "id": 2, "name": "Sinchalak", "author": "Abdulla Qahhor", "quantity_in_library": 0,
              "libraries": [10], "category": "Qissa" },
            { "id": 3, "name": "Mehrobdan chayon", "author": "Abdulla Qodiriy", "quantity_in_library": 5,
              "libraries": [10], "category": "Roman" },
            { "id": 4, "name": "Ўткан кунлар", "quantity_in_library": 1, "libraries": [13] },
            { "id": "broken" },
            { "id": 6, "author": "Nameless" }
        ]
    })
}

/// Libraries are served as a bare array
pub fn libraries() -> Value {
    json!([
        { "id": 10, "name": "Abbosov", "books": 45, "phone": "+998999999999", "telegram": "@telegram.org", "location": "Google Maps" },
        { "id": 13, "name": "aziz", "books": 0, "phone": "+998901864670" },
        { "id": 14, "name": "Bakhtiyor", "books": 120 },
        { "id": 15, "name": "Dilshod", "books": 89 }
    ])
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))).into_response()
}

async fn book(Path(id): Path<i64>) -> Response {
    books()["results"]
        .as_array()
        .and_then(|all| all.iter().find(|b| b["id"] == json!(id)).cloned())
        .map(|b| Json(b).into_response())
        .unwrap_or_else(not_found)
}

async fn library(Path(id): Path<i64>) -> Response {
    // library 11 sits behind a misconfigured proxy
    if id == 11 {
        return (StatusCode::OK, "<html>maintenance</html>").into_response();
    }

    libraries()
        .as_array()
        .and_then(|all| all.iter().find(|l| l["id"] == json!(id)).cloned())
        .map(|l| Json(l).into_response())
        .unwrap_or_else(not_found)
}

/// Start the fake API on an ephemeral port and return its base URL
pub async fn spawn() -> String {
    let app = Router::new()
        .route("/api/v1/books/books/", get(|| async { Json(books()) }))
        .route("/api/v1/books/book/:id/", get(book))
        .route("/api/v1/libraries/libraries/", get(|| async { Json(libraries()) }))
        .route("/api/v1/libraries/library/:id/", get(library));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake upstream");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Fake upstream crashed");
    });

    format!("http://{}/api/v1", addr)
}

/// A base URL nothing listens on
pub async fn unreachable() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe port");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);

    format!("http://{}/api/v1", addr)
}
