//! Remote catalog REST API client
//!
//! The remote API lives under a versioned base URL and serves books and
//! libraries as JSON. Lists come back either as a bare array or wrapped in
//! a paginated `{"results": [...]}` envelope.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::CatalogConfig,
    error::{AppError, AppResult},
    models::{Book, Library},
};

/// Read access to the remote catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn list_books(&self) -> AppResult<Vec<Book>>;
    async fn get_book(&self, id: i64) -> AppResult<Book>;
    async fn list_libraries(&self) -> AppResult<Vec<Library>>;
    async fn get_library(&self, id: i64) -> AppResult<Library>;
}

pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(config: &CatalogConfig) -> AppResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("ezma-catalog/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("HTTP client setup failed: {}", e)))?;

        let base_url = format!("{}/", config.base_url.trim_end_matches('/'));
        tracing::debug!("Remote catalog at {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, path: &str) -> AppResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        let is_json = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains("json"))
            .unwrap_or(false);

        if !is_json {
            return Err(AppError::Upstream(format!("{} did not answer with JSON", url)));
        }

        Ok(response.json().await?)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> AppResult<Vec<T>> {
        let body = self.get_json(path).await?;
        Ok(decode_list(body, path))
    }

    async fn get_one<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let body = self.get_json(path).await?;
        serde_json::from_value(body)
            .map_err(|e| AppError::Upstream(format!("unexpected payload from {}: {}", path, e)))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogClient {
    async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.get_list("books/books/").await
    }

    async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.get_one(&format!("books/book/{}/", id)).await
    }

    async fn list_libraries(&self) -> AppResult<Vec<Library>> {
        self.get_list("libraries/libraries/").await
    }

    async fn get_library(&self, id: i64) -> AppResult<Library> {
        self.get_one(&format!("libraries/library/{}/", id)).await
    }
}

/// Decode a list body, skipping elements that do not fit the record shape.
pub fn decode_list<T: DeserializeOwned>(body: Value, source: &str) -> Vec<T> {
    let elements = match body {
        Value::Array(elements) => elements,
        Value::Object(mut envelope) => match envelope.remove("results") {
            Some(Value::Array(elements)) => elements,
            _ => {
                tracing::warn!("{}: object without a results array, treating as empty", source);
                return Vec::new();
            }
        },
        other => {
            tracing::warn!("{}: expected a list, got {}", source, other);
            return Vec::new();
        }
    };

    let total = elements.len();
    let records: Vec<T> = elements
        .into_iter()
        .filter_map(|element| match serde_json::from_value(element) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("{}: skipping malformed record: {}", source, e);
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::info!("{}: kept {} of {} records", source, records.len(), total);
    }

    records
}
