//! List query parameters shared by the book and library listings

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Ordering of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum SortKey {
    #[default]
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "name-desc")]
    NameDesc,
    #[serde(rename = "count-asc", alias = "books-asc")]
    CountAsc,
    #[serde(rename = "count-desc", alias = "books-desc")]
    CountDesc,
}

impl SortKey {
    pub fn is_descending(&self) -> bool {
        matches!(self, SortKey::NameDesc | SortKey::CountDesc)
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::CountAsc => "count-asc",
            SortKey::CountDesc => "count-desc",
        };
        f.write_str(name)
    }
}

/// Search, sort and filter applied to a fetched listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive text matched against name (and author/publisher for books)
    pub search: String,
    /// One of `name-asc`, `name-desc`, `count-asc`, `count-desc`
    pub sort: SortKey,
    /// Keep only records whose count is greater than zero
    pub only_available: bool,
}

impl ListQuery {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: text.into(),
            ..Self::default()
        }
    }

    pub fn sorted(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn only_available(mut self, only_available: bool) -> Self {
        self.only_available = only_available;
        self
    }
}
