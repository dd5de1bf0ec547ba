//! List query engine: search, filter and order an in-memory listing.
//!
//! [`query`] is pure and total. It borrows the fetched records, never
//! mutates or rebuilds them, and degrades missing fields to "does not
//! match" (no name) or zero (no count) instead of failing.

pub mod text;

use crate::models::{CatalogRecord, ListQuery, SortKey};

pub use text::{fold, CollationKey};

/// Select and order the records matching `params`.
///
/// Records comparing equal under the requested order keep their original
/// relative order.
pub fn query<'a, R: CatalogRecord>(records: &'a [R], params: &ListQuery) -> Vec<&'a R> {
    let needle = fold(params.search.trim());

    let selected: Vec<(usize, &'a R)> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches(*record, &needle, params.only_available))
        .collect();

    let descending = params.sort.is_descending();
    match params.sort {
        SortKey::NameAsc | SortKey::NameDesc => order_by(selected, descending, |record| {
            CollationKey::new(record.name().unwrap_or_default())
        }),
        SortKey::CountAsc | SortKey::CountDesc => {
            order_by(selected, descending, |record| record.count())
        }
    }
}

fn matches<R: CatalogRecord>(record: &R, needle: &str, only_available: bool) -> bool {
    let Some(name) = record.name() else {
        return false;
    };

    if only_available && record.count() <= 0 {
        return false;
    }

    needle.is_empty()
        || fold(name).contains(needle)
        || record
            .extra_search_fields()
            .into_iter()
            .any(|field| fold(field).contains(needle))
}

/// Sort by a key computed once per record; ties fall back to the original index.
fn order_by<'a, R, K, F>(selected: Vec<(usize, &'a R)>, descending: bool, key: F) -> Vec<&'a R>
where
    K: Ord,
    F: Fn(&R) -> K,
{
    let mut keyed: Vec<(K, usize, &'a R)> = selected
        .into_iter()
        .map(|(index, record)| (key(record), index, record))
        .collect();

    keyed.sort_unstable_by(|a, b| {
        let by_key = a.0.cmp(&b.0);
        let by_key = if descending { by_key.reverse() } else { by_key };
        by_key.then_with(|| a.1.cmp(&b.1))
    });

    keyed.into_iter().map(|(_, _, record)| record).collect()
}
