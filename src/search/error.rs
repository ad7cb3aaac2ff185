use thiserror::Error;

use crate::db::StoreError;

/// Failure kinds of the search core. The HTTP layer maps each to a status code.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid search criteria: {0}")]
    InvalidCriteria(String),

    #[error("invalid property id: {0}")]
    InvalidIdentifier(String),

    #[error("property not found: {0}")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("store error: {0}")]
    Store(String),
}

impl From<StoreError> for SearchError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unconfigured => SearchError::StoreUnavailable("database not configured".into()),
            StoreError::Unavailable(msg) => SearchError::StoreUnavailable(msg),
            StoreError::Query(msg) => SearchError::Store(msg),
        }
    }
}
