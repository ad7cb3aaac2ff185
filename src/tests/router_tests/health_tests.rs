use super::{get, state_with, unconfigured_state};
use crate::app::AppState;
use crate::db::{Database, SqliteListingStore, StoreHandle};

#[test]
fn health_reports_connected_store() {
    let (state, _) = state_with(Vec::new());
    let (status, body) = get(&state, "/api/v1/health");
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
}

#[test]
fn health_reports_unconfigured_store() {
    let (status, body) = get(&unconfigured_state(), "/api/v1/health");
    assert_eq!(status, 200);
    assert_eq!(body["database"], "not_configured");
}

#[test]
fn health_reports_unreachable_store() {
    let db = Database::new("/nonexistent-dir/health/listings.sqlite");
    let state = AppState::new(
        StoreHandle::configured(SqliteListingStore::new(db)),
        super::ORIGIN,
    );

    let (status, body) = get(&state, "/api/v1/health");
    assert_eq!(status, 200);
    assert_eq!(body["database"], "error");
    assert!(body["error"].is_string());

    // search still degrades rather than failing
    let (status, body) = get(&state, "/api/v1/properties");
    assert_eq!(status, 200);
    assert_eq!(body["total"], 0);
}
