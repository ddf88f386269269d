//! Generic list-fetch-filter-mutate controller shared by every data table.
//!
//! DESIGN
//! ======
//! Every dashboard table follows the same loop: fetch a page, re-filter it in
//! memory, run a mutation, refetch. `TableState<R>` holds that loop's data for
//! any record type, and [`refresh`] / [`perform`] drive it against any
//! [`Transport`]. State lives behind [`TableStore`] so the same async flow
//! updates a Leptos signal in the browser and a `RefCell` in tests.
//!
//! List responses carry a ticket; a response older than the newest issued
//! request is discarded, so the table shows the last request made rather
//! than the last response to arrive.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

use leptos::prelude::*;
use records::{Api, ApiError, ApiRequest, ListQuery, Resource, Transport, matches_search};

/// Rows per page.
pub const PAGE_SIZE: u32 = 50;

/// Data, flags and filters behind one resource table.
#[derive(Clone, Debug)]
pub struct TableState<R> {
    pub items: Vec<R>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    /// Free-text search, sent to the backend and re-applied locally.
    pub search: String,
    /// Selected status filter value; empty means all.
    pub status: String,
    /// Filters the page always applies (e.g. the signed-in supervisor's id).
    pub fixed_filters: BTreeMap<String, String>,
    pub skip: u32,
    pub limit: u32,
    latest_ticket: u64,
}

impl<R> Default for TableState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            notice: None,
            search: String::new(),
            status: String::new(),
            fixed_filters: BTreeMap::new(),
            skip: 0,
            limit: PAGE_SIZE,
            latest_ticket: 0,
        }
    }
}

impl<R: Resource> TableState<R> {
    pub fn with_fixed_filters(filters: impl IntoIterator<Item = (String, String)>) -> Self {
        Self { fixed_filters: filters.into_iter().collect(), ..Self::default() }
    }

    /// Backend query for the current page, search and filters.
    pub fn query(&self) -> ListQuery {
        let mut query = ListQuery::new().with_page(self.skip, self.limit);
        let search = self.search.trim();
        if !search.is_empty() {
            query = query.with_search(search);
        }
        for (key, value) in &self.fixed_filters {
            query = query.with_filter(key.clone(), value.clone());
        }
        if let Some(field) = R::STATUS_FIELD
            && !self.status.is_empty()
        {
            query = query.with_filter(field, self.status.clone());
        }
        query
    }

    /// Mark a list fetch as started and return its ticket.
    pub fn begin_load(&mut self) -> u64 {
        self.latest_ticket += 1;
        self.loading = true;
        self.error = None;
        self.latest_ticket
    }

    /// Apply a list result. Returns `false` if the ticket is stale and the
    /// result was dropped.
    pub fn finish_load(&mut self, ticket: u64, result: Result<Vec<R>, ApiError>) -> bool {
        if ticket != self.latest_ticket {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(err) => self.error = Some(err.display_message(&format!("Failed to load {}s", R::NOUN))),
        }
        true
    }

    /// Rows after client-side search and status filtering.
    pub fn visible(&self) -> Vec<R> {
        self.items
            .iter()
            .filter(|record| matches_search(*record, &self.search))
            .filter(|record| self.status.is_empty() || record.status_value() == Some(self.status.as_str()))
            .cloned()
            .collect()
    }

    pub fn record_success(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
        self.error = None;
    }

    pub fn record_failure(&mut self, err: &ApiError, fallback: &str) {
        self.notice = None;
        self.error = Some(err.display_message(fallback));
    }

    pub fn dismiss_messages(&mut self) {
        self.error = None;
        self.notice = None;
    }

    /// Reset paging after a search or filter change.
    pub fn reset_page(&mut self) {
        self.skip = 0;
    }

    pub fn next_page(&mut self) {
        self.skip = self.skip.saturating_add(self.limit);
    }

    pub fn prev_page(&mut self) {
        self.skip = self.skip.saturating_sub(self.limit);
    }

    /// A full page came back, so another may follow.
    pub fn has_next_page(&self) -> bool {
        u32::try_from(self.items.len()).map_or(true, |len| len >= self.limit)
    }

    pub fn page_number(&self) -> u32 {
        self.skip / self.limit.max(1) + 1
    }
}

/// Somewhere a [`TableState`] lives.
pub trait TableStore {
    type Record;

    /// Run `f` against the state. `None` if the store is gone (e.g. the
    /// owning component was unmounted mid-request).
    fn modify<O>(&self, f: impl FnOnce(&mut TableState<Self::Record>) -> O) -> Option<O>;
}

impl<R: Send + Sync + 'static> TableStore for RwSignal<TableState<R>> {
    type Record = R;

    fn modify<O>(&self, f: impl FnOnce(&mut TableState<R>) -> O) -> Option<O> {
        self.try_update(f)
    }
}

impl<R> TableStore for RefCell<TableState<R>> {
    type Record = R;

    fn modify<O>(&self, f: impl FnOnce(&mut TableState<R>) -> O) -> Option<O> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Fetch the current page into the store.
pub async fn refresh<T, R, S>(api: &Api<T>, store: &S)
where
    T: Transport,
    R: Resource,
    S: TableStore<Record = R>,
{
    let Some((ticket, query)) = store.modify(|state| (state.begin_load(), state.query())) else {
        return;
    };
    let result = api.endpoint::<R>().list(&query).await;
    store.modify(|state| state.finish_load(ticket, result));
}

/// Run a mutation; on success record `success` and refetch the list once,
/// on failure record the normalized error and leave the list as it is.
///
/// Returns whether the mutation succeeded.
pub async fn perform<T, R, S>(api: &Api<T>, store: &S, request: ApiRequest, success: &str) -> bool
where
    T: Transport,
    R: Resource,
    S: TableStore<Record = R>,
{
    match api.send(request).await {
        Ok(_) => {
            store.modify(|state| state.record_success(success));
            refresh(api, store).await;
            true
        }
        Err(err) => {
            let fallback = format!("Failed to update {}", R::NOUN);
            store.modify(|state| state.record_failure(&err, &fallback));
            false
        }
    }
}
