use astra::{Body, Response, ResponseBuilder};

const ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Attach CORS headers for the configured origin.
pub fn with_cors(mut resp: Response, origin: &str) -> Response {
    set_header(&mut resp, "Access-Control-Allow-Origin", origin);
    set_header(&mut resp, "Access-Control-Allow-Credentials", "true");
    set_header(&mut resp, "Vary", "Origin");
    resp
}

fn set_header(resp: &mut Response, name: &'static str, value: &str) {
    match value.parse() {
        Ok(v) => {
            resp.headers_mut().insert(name, v);
        }
        Err(_) => tracing::warn!(name, value, "skipping invalid header value"),
    }
}

/// Answer a CORS preflight request.
pub fn preflight_response() -> Response {
    ResponseBuilder::new()
        .status(204)
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
        .header("Access-Control-Max-Age", "600")
        .body(Body::empty())
        .unwrap_or_else(|_| Response::new(Body::empty()))
}
