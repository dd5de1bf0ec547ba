//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, libraries, preferences};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EZMA Catalog API",
        version = "1.0.0",
        description = "Library network catalog browsing REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        // Libraries
        libraries::list_libraries,
        libraries::get_library,
        // Preferences
        preferences::get_theme,
        preferences::update_theme,
        preferences::toggle_theme,
    ),
    components(
        schemas(
            // Catalog
            crate::models::Book,
            crate::models::BookDetail,
            crate::models::Library,
            crate::models::LibraryDetail,
            crate::models::CategoryCount,
            crate::models::ListQuery,
            crate::models::SortKey,
            crate::api::BookList,
            crate::api::LibraryList,
            // Preferences
            crate::models::Theme,
            preferences::ThemeBody,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book listing and details"),
        (name = "libraries", description = "Library listing and details"),
        (name = "preferences", description = "Display preferences")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
