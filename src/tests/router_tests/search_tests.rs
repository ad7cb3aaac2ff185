use super::{get, send, state_with, unconfigured_state};
use crate::tests::utils::sample_listing;
use http::Method;
use std::collections::HashSet;

#[test]
fn search_without_filters_returns_envelope() {
    let (state, _) = state_with((0..3).map(|i| sample_listing("10001", i as f64, 1)).collect());

    let (status, body) = get(&state, "/api/v1/properties");
    assert_eq!(status, 200);
    assert_eq!(body["properties"].as_array().unwrap().len(), 3);
    assert_eq!(body["total"], 3);
    assert_eq!(body["limit"], 50);
    assert_eq!(body["skip"], 0);
    assert!(body["properties"][0]["_id"].is_string());
}

#[test]
fn search_applies_filters() {
    let mut listings = Vec::new();
    for price in [200_000.0, 210_000.0, 350_000.0, 400_000.0, 999_000.0] {
        listings.push(sample_listing("10001", price, 3));
    }
    listings.push(sample_listing("10001", 150_000.0, 3));
    listings.push(sample_listing("10001", 300_000.0, 4));
    listings.push(sample_listing("60601", 300_000.0, 3));
    let (state, _) = state_with(listings);

    let (status, body) = get(
        &state,
        "/api/v1/properties?zip_code=10001&min_price=200000&bedrooms=3&limit=10&skip=0",
    );
    assert_eq!(status, 200);
    assert_eq!(body["properties"].as_array().unwrap().len(), 5);
    assert_eq!(body["total"], 5);
    assert_eq!(body["limit"], 10);
}

#[test]
fn search_pages_are_disjoint() {
    let (state, _) = state_with((0..12).map(|i| sample_listing("90001", i as f64, 2)).collect());

    let mut seen = HashSet::new();
    for skip in [0, 5, 10] {
        let (_, body) = get(&state, &format!("/api/v1/properties?limit=5&skip={skip}"));
        assert_eq!(body["total"], 12);
        for item in body["properties"].as_array().unwrap() {
            assert!(seen.insert(item["_id"].as_str().unwrap().to_string()));
        }
    }
    assert_eq!(seen.len(), 12);
}

#[test]
fn invalid_parameters_are_client_errors() {
    let (state, _) = state_with(Vec::new());

    for uri in [
        "/api/v1/properties?zip_code=123",
        "/api/v1/properties?min_price=-10",
        "/api/v1/properties?limit=500",
        "/api/v1/properties?skip=-1",
        "/api/v1/properties?bedrooms=many",
    ] {
        let (status, body) = get(&state, uri);
        assert_eq!(status, 400, "{uri}");
        assert!(body["detail"].is_string());
    }
}

#[test]
fn zip_code_is_not_trimmed_or_dropped() {
    let (state, _) = state_with(vec![
        sample_listing("10001", 100.0, 1),
        sample_listing("90001", 200.0, 1),
    ]);

    for uri in [
        "/api/v1/properties?zip_code=%2010001",
        "/api/v1/properties?zip_code=10001%20%20",
        "/api/v1/properties?zip_code=",
    ] {
        let (status, body) = get(&state, uri);
        assert_eq!(status, 400, "{uri}");
        assert_eq!(body["detail"], "zip_code: must be exactly 5 characters");
    }

    let (status, body) = get(&state, "/api/v1/properties?zip_code=10001");
    assert_eq!(status, 200);
    assert_eq!(body["total"], 1);
}

#[test]
fn search_without_store_is_empty_not_an_error() {
    let state = unconfigured_state();
    let (status, body) = get(&state, "/api/v1/properties");

    assert_eq!(status, 200);
    assert_eq!(
        body,
        serde_json::json!({ "properties": [], "total": 0, "limit": 50, "skip": 0 })
    );
}

#[test]
fn wrong_method_and_unknown_route() {
    let state = unconfigured_state();
    assert_eq!(send(&state, Method::POST, "/api/v1/properties").0, 405);
    assert_eq!(get(&state, "/api/v1/nope").0, 404);
    assert_eq!(get(&state, "/").0, 404);
}

#[test]
fn preflight_is_answered() {
    let state = unconfigured_state();
    let (status, body) = send(&state, Method::OPTIONS, "/api/v1/properties");
    assert_eq!(status, 204);
    assert!(body.is_null());
}
