mod health_tests;
mod property_tests;
mod search_tests;
mod seed_tests;

use crate::app::AppState;
use crate::db::{ListingStore, StoreHandle};
use crate::domain::{ListingId, NewListing};
use crate::router::serve;
use crate::tests::utils::make_store;
use astra::Body;
use http::{Method, Request};
use std::io::Read;

pub const ORIGIN: &str = "http://localhost:3000";

/// App state over a fresh store holding `listings`, plus their ids in insertion order.
pub fn state_with(listings: Vec<NewListing>) -> (AppState, Vec<ListingId>) {
    let store = make_store();
    let ids = store.insert_many(listings).expect("insert listings");
    (AppState::new(StoreHandle::configured(store), ORIGIN), ids)
}

pub fn unconfigured_state() -> AppState {
    AppState::new(StoreHandle::Unconfigured, ORIGIN)
}

/// Send a request through the full pipeline and decode the JSON body.
pub fn send(state: &AppState, method: Method, uri: &str) -> (u16, serde_json::Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let resp = serve(req, state);
    let status = resp.status().as_u16();
    assert_eq!(
        resp.headers()
            .get("Access-Control-Allow-Origin")
            .unwrap()
            .to_str()
            .unwrap(),
        ORIGIN
    );

    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_str(&body).expect("response body should be JSON")
    };
    (status, json)
}

pub fn get(state: &AppState, uri: &str) -> (u16, serde_json::Value) {
    send(state, Method::GET, uri)
}
