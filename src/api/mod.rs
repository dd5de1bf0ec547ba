//! API handlers for the EZMA catalog REST endpoints

pub mod books;
pub mod health;
pub mod libraries;
pub mod openapi;
pub mod preferences;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::{
    error::AppError,
    models::{Book, Library, ListQuery},
    AppState,
};

/// Extractor for listing parameters.
///
/// Malformed parameters are answered with the JSON error body.
pub struct ListParams(pub ListQuery);

#[async_trait]
impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(ListParams(query))
    }
}

/// Listing response wrapper
#[derive(Serialize, ToSchema)]
#[aliases(BookList = ListResponse<Book>, LibraryList = ListResponse<Library>)]
pub struct ListResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Matching records, in display order
    pub items: Vec<T>,
    /// Number of matching records
    pub total: usize,
}

impl<T> From<Vec<T>> for ListResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    fn from(items: Vec<T>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::list_books))
        .route("/books/:id", get(books::get_book))
        // Libraries
        .route("/libraries", get(libraries::list_libraries))
        .route("/libraries/:id", get(libraries::get_library))
        // Preferences
        .route(
            "/preferences/theme",
            get(preferences::get_theme).put(preferences::update_theme),
        )
        .route("/preferences/theme/toggle", post(preferences::toggle_theme))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        // Applied innermost-first so the stack is cors -> compression -> trace,
        // matching the previous ServiceBuilder ordering.
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
