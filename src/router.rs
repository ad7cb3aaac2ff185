use std::time::Instant;

use astra::{Request, Response};
use serde_json::json;

use crate::app::AppState;
use crate::errors::ServerError;
use crate::params;
use crate::responses::{error_response, json_response, preflight_response, with_cors, ResultResp};
use crate::seed::seed_store;

const API_PREFIX: &str = "/api/v1";

/// Full request handling: routing, error rendering, CORS headers and access log.
pub fn serve(req: Request, state: &AppState) -> Response {
    let started = Instant::now();
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    let resp = match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => {
            if err.status() >= 500 {
                tracing::error!(%method, %path, "request failed: {err}");
            }
            error_response(err)
        }
    };

    tracing::info!(
        %method,
        %path,
        status = resp.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    with_cors(resp, &state.cors_origin)
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let query = req.uri().query();
    let path = req
        .uri()
        .path()
        .strip_prefix(API_PREFIX)
        .ok_or_else(|| ServerError::NotFound("Not Found".into()))?;

    if method == "OPTIONS" {
        return Ok(preflight_response());
    }

    match path.trim_end_matches('/') {
        "/health" => match method {
            "GET" => health(state),
            _ => Err(ServerError::MethodNotAllowed),
        },
        "/properties" => match method {
            "GET" => search_properties(state, query),
            _ => Err(ServerError::MethodNotAllowed),
        },
        "/seed" => match method {
            "POST" => seed_properties(state, query),
            _ => Err(ServerError::MethodNotAllowed),
        },
        other => match other.strip_prefix("/properties/") {
            Some(id) if !id.contains('/') => match method {
                "GET" => get_property(state, id),
                _ => Err(ServerError::MethodNotAllowed),
            },
            _ => Err(ServerError::NotFound("Not Found".into())),
        },
    }
}

fn health(state: &AppState) -> ResultResp {
    let body = match state.store().get() {
        Err(_) => json!({ "status": "ok", "database": "not_configured" }),
        Ok(store) => match store.ping() {
            Ok(()) => json!({ "status": "ok", "database": "connected" }),
            Err(e) => json!({ "status": "ok", "database": "error", "error": e.to_string() }),
        },
    };
    json_response(200, &body)
}

fn search_properties(state: &AppState, query: Option<&str>) -> ResultResp {
    let criteria = params::search_criteria(query)?;
    let results = state.executor.search(&criteria)?;
    json_response(200, &results)
}

fn get_property(state: &AppState, id: &str) -> ResultResp {
    let listing = state.executor.get(id)?;
    json_response(200, &listing)
}

fn seed_properties(state: &AppState, query: Option<&str>) -> ResultResp {
    let count = params::seed_count(query)?;
    let store = state.store().get().map_err(|_| {
        ServerError::ServiceUnavailable(
            "Database not configured. Please set DATABASE_URL".into(),
        )
    })?;

    let report = seed_store(store, &mut rand::thread_rng(), count)?;
    json_response(
        200,
        &json!({
            "message": format!("Successfully seeded {} properties", report.inserted),
            "total_properties": report.total,
            "inserted_count": report.inserted,
        }),
    )
}
