//! Catalog browsing service

use std::sync::Arc;

use futures::future::join_all;

use crate::{
    error::AppResult,
    models::{Book, BookDetail, CategoryCount, Library, LibraryDetail, ListQuery},
    query,
    services::source::CatalogSource,
};

/// Books shown next to a book's detail
pub const RELATED_BOOKS: usize = 4;
/// Categories summarised on a library's detail
pub const TOP_CATEGORIES: usize = 3;

#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Check the remote catalog answers a listing request
    pub async fn probe(&self) -> AppResult<()> {
        self.source.list_libraries().await.map(|_| ())
    }

    /// Fetch all books and apply search/sort/filter
    pub async fn list_books(&self, params: &ListQuery) -> AppResult<Vec<Book>> {
        let books = self.source.list_books().await?;
        let selected: Vec<Book> = query::query(&books, params).into_iter().cloned().collect();

        tracing::debug!(
            "Books: {} fetched, {} selected (search={:?}, sort={})",
            books.len(),
            selected.len(),
            params.search,
            params.sort
        );
        Ok(selected)
    }

    /// Fetch all libraries and apply search/sort/filter
    pub async fn list_libraries(&self, params: &ListQuery) -> AppResult<Vec<Library>> {
        let libraries = self.source.list_libraries().await?;
        let selected: Vec<Library> = query::query(&libraries, params)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(
            "Libraries: {} fetched, {} selected (search={:?}, sort={})",
            libraries.len(),
            selected.len(),
            params.search,
            params.sort
        );
        Ok(selected)
    }

    /// Book with the libraries holding it and a few other books.
    ///
    /// Only the book itself is required; holding libraries or the related
    /// list that fail to load are left out.
    pub async fn book_detail(&self, id: i64) -> AppResult<BookDetail> {
        let book = self.source.get_book(id).await?;

        let holdings = join_all(book.library_ids().iter().map(|&library_id| async move {
            match self.source.get_library(library_id).await {
                Ok(library) => Some(library),
                Err(e) => {
                    tracing::warn!("Book {}: library {} not loaded: {}", id, library_id, e);
                    None
                }
            }
        }));

        let (libraries, all_books) = tokio::join!(holdings, self.source.list_books());

        let related = match all_books {
            Ok(books) => books
                .into_iter()
                .filter(|other| other.id != book.id)
                .take(RELATED_BOOKS)
                .collect(),
            Err(e) => {
                tracing::warn!("Book {}: related books not loaded: {}", id, e);
                Vec::new()
            }
        };

        Ok(BookDetail {
            book,
            libraries: libraries.into_iter().flatten().collect(),
            related,
        })
    }

    /// Library with its books (search/sort/filter applied) and top categories
    pub async fn library_detail(&self, id: i64, params: &ListQuery) -> AppResult<LibraryDetail> {
        let library = self.source.get_library(id).await?;

        let held: Vec<Book> = match self.source.list_books().await {
            Ok(books) => books.into_iter().filter(|book| book.is_held_by(id)).collect(),
            Err(e) => {
                tracing::warn!("Library {}: books not loaded: {}", id, e);
                Vec::new()
            }
        };

        let top_categories = top_categories(&held, TOP_CATEGORIES);
        let books = query::query(&held, params).into_iter().cloned().collect();

        Ok(LibraryDetail {
            library,
            books,
            top_categories,
        })
    }
}

/// Most frequent categories, most frequent first; ties keep first-seen order
fn top_categories(books: &[Book], limit: usize) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();

    for category in books.iter().filter_map(|book| book.category.as_deref()) {
        match counts.iter_mut().find(|entry| entry.category == category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: category.to_string(),
                count: 1,
            }),
        }
    }

    // stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}
