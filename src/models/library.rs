//! Library (branch) model as served by the remote catalog API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::book::Book;
use super::record::CatalogRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Library {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Number of books in the library
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub books: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

impl CatalogRecord for Library {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn count(&self) -> i64 {
        self.books.unwrap_or(0)
    }
}

/// Category frequency among a library's books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Library detail view
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LibraryDetail {
    pub library: Library,
    /// Books held by this library, after search/sort/filter
    pub books: Vec<Book>,
    /// Most frequent categories among all books held, most frequent first
    pub top_categories: Vec<CategoryCount>,
}
