use crate::config::AppConfig;
use crate::db::{Database, SqliteListingStore, StoreHandle};
use crate::search::SearchExecutor;

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub executor: SearchExecutor,
    pub cors_origin: String,
}

impl AppState {
    pub fn new(store: StoreHandle, cors_origin: impl Into<String>) -> Self {
        Self {
            executor: SearchExecutor::new(store),
            cors_origin: cors_origin.into(),
        }
    }

    /// Wire the store from configuration. The database is opened lazily by each
    /// worker thread on its first request.
    pub fn from_config(config: &AppConfig) -> Self {
        let store = match &config.database_path {
            Some(path) => {
                let db = Database::new(path.clone()).with_busy_timeout(config.busy_timeout);
                tracing::info!(path = %path, "using SQLite listing store");
                StoreHandle::configured(SqliteListingStore::new(db))
            }
            None => {
                tracing::warn!("DATABASE_URL not set; search will return empty results");
                StoreHandle::Unconfigured
            }
        };

        Self::new(store, config.cors_origin.clone())
    }

    pub fn store(&self) -> &StoreHandle {
        self.executor.store()
    }
}
