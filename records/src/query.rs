//! Pagination, search and filter parameters for list endpoints.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Page size used when a caller does not pick one.
pub const DEFAULT_LIMIT: u32 = 100;

/// Unreserved characters (RFC 3986) stay literal; everything else is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Query parameters accepted by every list endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub skip: u32,
    pub limit: u32,
    /// Free-text search forwarded to the backend.
    pub search: Option<String>,
    /// Exact-match filters such as `registration_status=pending`.
    pub filters: BTreeMap<String, String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { skip: 0, limit: DEFAULT_LIMIT, search: None, filters: BTreeMap::new() }
    }
}

impl ListQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_page(mut self, skip: u32, limit: u32) -> Self {
        self.skip = skip;
        self.limit = limit;
        self
    }

    /// Encode as `key=value&...` without a leading `?`.
    ///
    /// Blank search text and blank filter values are omitted; filters come
    /// out in key order so identical queries encode identically.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs = vec![("skip".to_owned(), self.skip.to_string()), ("limit".to_owned(), self.limit.to_string())];
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search".to_owned(), search.to_owned()));
        }
        for (key, value) in &self.filters {
            let value = value.trim();
            if key.is_empty() || value.is_empty() {
                continue;
            }
            pairs.push((key.clone(), value.to_owned()));
        }
        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Percent-encode one query or path component.
pub(crate) fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, QUERY_VALUE).to_string()
}
