use rusqlite::Connection;
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::db::StoreError;

const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

// Thread-local connections, one per database path.
thread_local! {
    static DB_CONNS: RefCell<HashMap<String, Connection>> = RefCell::new(HashMap::new());
}

/// Handle to a SQLite database file. Cloning only copies the path.
///
/// Each worker thread opens its own connection on first use, so the handle can be
/// shared freely across threads.
#[derive(Debug, Clone)]
pub struct Database {
    path: String,
    busy_timeout: Duration,
}

impl Database {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: Duration::from_millis(5000),
        }
    }

    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Provides the calling thread's connection to the closure, opening it
    /// (and applying the schema) on first use.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StoreError>,
    {
        DB_CONNS
            .try_with(|cell| {
                let mut conns = cell.borrow_mut();
                if !conns.contains_key(&self.path) {
                    let conn = self.open()?;
                    conns.insert(self.path.clone(), conn);
                }
                match conns.get_mut(&self.path) {
                    Some(conn) => f(conn),
                    None => Err(StoreError::Unavailable("connection slot missing".into())),
                }
            })
            .map_err(|e| StoreError::Unavailable(format!("thread-local access failed: {e}")))?
    }

    fn open(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path)
            .map_err(|e| StoreError::Unavailable(format!("open {} failed: {e}", self.path)))?;
        conn.busy_timeout(self.busy_timeout)
            .map_err(|e| StoreError::Unavailable(format!("busy_timeout failed: {e}")))?;
        conn.execute_batch(SCHEMA_SQL)
            .map_err(|e| StoreError::Unavailable(format!("failed to apply schema: {e}")))?;

        tracing::debug!(path = %self.path, "opened database connection");
        Ok(conn)
    }
}
