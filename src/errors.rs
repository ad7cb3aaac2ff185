// errors.rs
use thiserror::Error;

use crate::db::StoreError;
use crate::search::SearchError;

/// Errors surfaced by route handlers, each mapping to one HTTP status.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{0}")]
    NotFound(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound(_) => 404,
            ServerError::MethodNotAllowed => 405,
            ServerError::BadRequest(_) => 400,
            ServerError::ServiceUnavailable(_) => 503,
            ServerError::DbError(_) | ServerError::InternalError => 500,
        }
    }
}

impl From<SearchError> for ServerError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::InvalidCriteria(msg) => ServerError::BadRequest(msg),
            SearchError::InvalidIdentifier(_) => ServerError::BadRequest("Invalid property ID".into()),
            SearchError::NotFound(_) => ServerError::NotFound("Property not found".into()),
            SearchError::StoreUnavailable(_) => {
                ServerError::ServiceUnavailable("Database unavailable".into())
            }
            SearchError::Store(msg) => ServerError::DbError(msg),
        }
    }
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        SearchError::from(err).into()
    }
}
