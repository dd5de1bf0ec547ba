//! Book model as served by the remote catalog API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use super::library::Library;
use super::record::CatalogRecord;

/// A book entry. Only `id` is required; every other field may be absent
/// or `null` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// Copies held across the network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_in_library: Option<i64>,
    /// Ids of the libraries holding this book
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub libraries: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Fields not modelled above, passed through untouched
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

impl Book {
    pub fn library_ids(&self) -> &[i64] {
        self.libraries.as_deref().unwrap_or_default()
    }

    pub fn is_held_by(&self, library_id: i64) -> bool {
        self.library_ids().contains(&library_id)
    }
}

impl CatalogRecord for Book {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn extra_search_fields(&self) -> Vec<&str> {
        [self.author.as_deref(), self.publisher.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    fn count(&self) -> i64 {
        self.quantity_in_library.unwrap_or(0)
    }
}

/// Book detail view: the book, the libraries holding it and a few others
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookDetail {
    pub book: Book,
    /// Holding libraries that could be loaded, in the book's order
    pub libraries: Vec<Library>,
    /// Other books of the catalog
    pub related: Vec<Book>,
}
