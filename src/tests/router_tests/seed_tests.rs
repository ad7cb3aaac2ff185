use super::{get, send, state_with, unconfigured_state};
use http::Method;

#[test]
fn seed_inserts_requested_count() {
    let (state, _) = state_with(Vec::new());

    let (status, body) = send(&state, Method::POST, "/api/v1/seed?count=7");
    assert_eq!(status, 200);
    assert_eq!(body["inserted_count"], 7);
    assert_eq!(body["total_properties"], 7);
    assert_eq!(body["message"], "Successfully seeded 7 properties");

    let (_, body) = get(&state, "/api/v1/properties?limit=100");
    assert_eq!(body["total"], 7);
}

#[test]
fn seed_defaults_to_fifty() {
    let (state, _) = state_with(Vec::new());
    let (_, body) = send(&state, Method::POST, "/api/v1/seed");
    assert_eq!(body["inserted_count"], 50);
}

#[test]
fn seed_requires_a_store() {
    let (status, body) = send(&unconfigured_state(), Method::POST, "/api/v1/seed?count=3");
    assert_eq!(status, 503);
    assert!(body["detail"].as_str().unwrap().contains("DATABASE_URL"));
}

#[test]
fn seed_rejects_bad_count() {
    let (state, _) = state_with(Vec::new());
    assert_eq!(send(&state, Method::POST, "/api/v1/seed?count=0").0, 400);
    assert_eq!(send(&state, Method::GET, "/api/v1/seed").0, 405);
}
