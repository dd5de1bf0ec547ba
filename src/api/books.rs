//! Book endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{Book, BookDetail, ListQuery},
};

use super::{ListParams, ListResponse};

/// List books with search, sort and availability filter
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(ListQuery),
    responses(
        (status = 200, description = "Matching books", body = super::BookList),
        (status = 400, description = "Invalid query parameters", body = crate::error::ErrorResponse),
        (status = 502, description = "Remote catalog error", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    ListParams(query): ListParams,
) -> AppResult<Json<ListResponse<Book>>> {
    let books = state.services.catalog.list_books(&query).await?;
    Ok(Json(books.into()))
}

/// Get a book with its holding libraries and related books
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDetail),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BookDetail>> {
    let detail = state.services.catalog.book_detail(id).await?;
    Ok(Json(detail))
}
