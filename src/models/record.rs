//! Common view over the record kinds returned by the remote catalog.
//!
//! Books and libraries carry their "how many" figure under different wire
//! names (`quantity_in_library` and `books`). The wire shapes are kept as
//! they are and the difference is absorbed here, so list querying works on
//! either kind without knowing which one it holds.

/// A record the list query engine can search, filter and order
pub trait CatalogRecord {
    /// Unique identifier within one fetched list
    fn id(&self) -> i64;

    /// Display name; records without one never match a query
    fn name(&self) -> Option<&str>;

    /// Text fields searched in addition to the name
    fn extra_search_fields(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Availability figure used by the count sort keys and the
    /// `only_available` filter. Missing values count as zero.
    fn count(&self) -> i64;
}
