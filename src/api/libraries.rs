//! Library endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{Library, LibraryDetail, ListQuery},
};

use super::{ListParams, ListResponse};

/// List libraries with search, sort and "has books" filter
#[utoipa::path(
    get,
    path = "/libraries",
    tag = "libraries",
    params(ListQuery),
    responses(
        (status = 200, description = "Matching libraries", body = super::LibraryList),
        (status = 400, description = "Invalid query parameters", body = crate::error::ErrorResponse),
        (status = 502, description = "Remote catalog error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_libraries(
    State(state): State<crate::AppState>,
    ListParams(query): ListParams,
) -> AppResult<Json<ListResponse<Library>>> {
    let libraries = state.services.catalog.list_libraries(&query).await?;
    Ok(Json(libraries.into()))
}

/// Get a library with its books and top categories.
///
/// The query parameters apply to the library's book list.
#[utoipa::path(
    get,
    path = "/libraries/{id}",
    tag = "libraries",
    params(
        ("id" = i64, Path, description = "Library ID"),
        ListQuery
    ),
    responses(
        (status = 200, description = "Library details", body = LibraryDetail),
        (status = 400, description = "Invalid query parameters", body = crate::error::ErrorResponse),
        (status = 404, description = "Library not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_library(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    ListParams(query): ListParams,
) -> AppResult<Json<LibraryDetail>> {
    let detail = state.services.catalog.library_detail(id, &query).await?;
    Ok(Json(detail))
}
