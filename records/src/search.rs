//! Client-side search over an already fetched page of records.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::resource::Resource;

/// Case-insensitive substring match of `needle` against the record's search
/// fields. A blank needle matches every record.
#[must_use]
pub fn matches_search<R: Resource>(record: &R, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record.search_fields().iter().any(|field| field.to_lowercase().contains(&needle))
}

/// Records matching `needle`, in their original order.
#[must_use]
pub fn filter_records<'a, R: Resource>(records: &'a [R], needle: &str) -> Vec<&'a R> {
    records.iter().filter(|record| matches_search(*record, needle)).collect()
}
