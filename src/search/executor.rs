//! Paginated search execution.
//!
//! A search issues two independent reads against the store: a bounded `find` for
//! the page and a `count` for the total, both with the same predicate. They are
//! not taken from one snapshot, so a concurrent insert between the two can make
//! `total` disagree with what `items` suggests. Read-only search accepts that.

use serde::Serialize;

use super::criteria::{Page, SearchCriteria};
use super::error::SearchError;
use super::filter::{compile, CompiledPredicate};
use crate::db::StoreHandle;
use crate::domain::{Listing, ListingId};

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    #[serde(rename = "properties")]
    pub items: Vec<Listing>,
    pub total: u64,
    pub limit: u32,
    pub skip: u64,
}

impl SearchResults {
    pub fn empty(page: Page) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            limit: page.limit,
            skip: page.skip,
        }
    }
}

/// Runs searches and single-listing lookups against an injected store.
#[derive(Debug, Clone)]
pub struct SearchExecutor {
    store: StoreHandle,
}

impl SearchExecutor {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// Compile `criteria` and run it.
    pub fn search(&self, criteria: &SearchCriteria) -> Result<SearchResults, SearchError> {
        let predicate = compile(criteria)?;
        self.execute(&predicate, criteria.page)
    }

    /// Fetch one page plus the total match count.
    ///
    /// An unconfigured or unreachable store yields an empty page instead of an error.
    pub fn execute(
        &self,
        predicate: &CompiledPredicate,
        page: Page,
    ) -> Result<SearchResults, SearchError> {
        let page = Page::new(page.limit as i64, i64::try_from(page.skip).unwrap_or(i64::MAX));

        let store = match self.store.get() {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("search served without a store: {e}");
                return Ok(SearchResults::empty(page));
            }
        };

        let fetched = store
            .find(predicate, page)
            .and_then(|items| store.count(predicate).map(|total| (items, total)));

        match fetched {
            Ok((mut items, total)) => {
                items.truncate(page.limit as usize);
                tracing::debug!(
                    filters = predicate.len(),
                    returned = items.len(),
                    total,
                    "search executed"
                );
                Ok(SearchResults {
                    items,
                    total,
                    limit: page.limit,
                    skip: page.skip,
                })
            }
            Err(e) if e.is_unavailable() => {
                tracing::warn!("search degraded to empty result: {e}");
                Ok(SearchResults::empty(page))
            }
            Err(e) => {
                tracing::error!("search failed: {e}");
                Err(e.into())
            }
        }
    }

    /// Look up one listing by its external id.
    ///
    /// The id format is checked before the store is consulted. Unlike `search`,
    /// a missing store is reported as `StoreUnavailable`.
    pub fn get(&self, raw_id: &str) -> Result<Listing, SearchError> {
        let id = ListingId::parse(raw_id)?;
        let store = self.store.get()?;

        store
            .find_by_id(&id)?
            .ok_or_else(|| SearchError::NotFound(id.to_string()))
    }
}
