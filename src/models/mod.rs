//! Data models for the EZMA catalog

pub mod book;
pub mod library;
pub mod query;
pub mod record;
pub mod theme;

// Re-export commonly used types
pub use book::{Book, BookDetail};
pub use library::{CategoryCount, Library, LibraryDetail};
pub use query::{ListQuery, SortKey};
pub use record::CatalogRecord;
pub use theme::Theme;
