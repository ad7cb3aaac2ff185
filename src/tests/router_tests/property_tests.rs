use super::{get, state_with, unconfigured_state};
use crate::app::AppState;
use crate::db::{Database, SqliteListingStore, StoreHandle};
use crate::tests::utils::sample_listing;

#[test]
fn fetches_listing_by_id() {
    let (state, ids) = state_with(vec![
        sample_listing("10001", 100.0, 1),
        sample_listing("77001", 200.0, 2),
    ]);

    let (status, body) = get(&state, &format!("/api/v1/properties/{}", ids[1]));
    assert_eq!(status, 200);
    assert_eq!(body["_id"], ids[1].as_str());
    assert_eq!(body["zip_code"], "77001");
    assert_eq!(body["bedrooms"], 2);
}

#[test]
fn missing_listing_is_not_found() {
    let (state, _) = state_with(Vec::new());
    let (status, body) = get(&state, "/api/v1/properties/0123456789abcdef01234567");
    assert_eq!(status, 404);
    assert_eq!(body["detail"], "Property not found");
}

#[test]
fn malformed_id_is_bad_request() {
    let (state, _) = state_with(Vec::new());
    let (status, body) = get(&state, "/api/v1/properties/not-an-id");
    assert_eq!(status, 400);
    assert_eq!(body["detail"], "Invalid property ID");
}

#[test]
fn unconfigured_store_is_unavailable() {
    let state = unconfigured_state();
    let (status, body) = get(&state, "/api/v1/properties/0123456789abcdef01234567");
    assert_eq!(status, 503);
    assert_eq!(body["detail"], "Database unavailable");

    // the id is validated before the store is consulted
    let (status, _) = get(&state, "/api/v1/properties/xyz");
    assert_eq!(status, 400);
}

#[test]
fn unreachable_store_is_unavailable() {
    let db = Database::new("/nonexistent-dir/property/listings.sqlite");
    let state = AppState::new(
        StoreHandle::configured(SqliteListingStore::new(db)),
        super::ORIGIN,
    );

    let (status, body) = get(&state, "/api/v1/properties/0123456789abcdef01234567");
    assert_eq!(status, 503);
    assert_eq!(body["detail"], "Database unavailable");
}
