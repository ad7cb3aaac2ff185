//! The store collaborator seen by the search core.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::{Listing, ListingId, NewListing};
use crate::search::{CompiledPredicate, Page};

#[derive(Debug, Error)]
pub enum StoreError {
    /// No database was configured for this process.
    #[error("database not configured")]
    Unconfigured,

    /// A database is configured but could not be reached or opened.
    #[error("database unavailable: {0}")]
    Unavailable(String),

    #[error("query failed: {0}")]
    Query(String),
}

impl StoreError {
    /// True for the variants the search path degrades on.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unconfigured | StoreError::Unavailable(_))
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Query(err.to_string())
    }
}

/// Read access to listings plus the bulk insert used by seeding.
///
/// Implementations must return `find` results in a stable order so that
/// consecutive pages neither repeat nor skip listings.
pub trait ListingStore: Send + Sync {
    fn find(&self, predicate: &CompiledPredicate, page: Page) -> Result<Vec<Listing>, StoreError>;

    fn count(&self, predicate: &CompiledPredicate) -> Result<u64, StoreError>;

    fn find_by_id(&self, id: &ListingId) -> Result<Option<Listing>, StoreError>;

    fn insert_many(&self, listings: Vec<NewListing>) -> Result<Vec<ListingId>, StoreError>;

    /// Connectivity check.
    fn ping(&self) -> Result<(), StoreError>;
}

/// The store as injected into the executor: either configured or explicitly absent.
#[derive(Clone)]
pub enum StoreHandle {
    Unconfigured,
    Configured(Arc<dyn ListingStore>),
}

impl StoreHandle {
    pub fn configured(store: impl ListingStore + 'static) -> Self {
        StoreHandle::Configured(Arc::new(store))
    }

    pub fn get(&self) -> Result<&dyn ListingStore, StoreError> {
        match self {
            StoreHandle::Configured(store) => Ok(store.as_ref()),
            StoreHandle::Unconfigured => Err(StoreError::Unconfigured),
        }
    }
}

impl std::fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreHandle::Unconfigured => f.write_str("StoreHandle::Unconfigured"),
            StoreHandle::Configured(_) => f.write_str("StoreHandle::Configured"),
        }
    }
}
