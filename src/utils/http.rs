/*---------- Imports ----------*/
use crate::models::common::ErrorPayload;
use lambda_http::http::{self, response::Builder, StatusCode};
use lambda_http::{Body, Response};
use serde::de::DeserializeOwned;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Authorization, Content-Type";
pub const ALLOW_METHODS: &str = "POST, OPTIONS";

pub struct HttpResponse;

fn cors_builder() -> Builder {
    Response::builder()
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
}

impl HttpResponse {
    /// Mirrors an upstream status and body. No content type is set here.
    pub fn build_passthrough_response(
        status: u16,
        body: String,
    ) -> Result<Response<Body>, http::Error> {
        cors_builder().status(status).body(Body::from(body))
    }

    pub fn build_error_response(message: &str) -> Result<Response<Body>, http::Error> {
        let payload = serde_json::to_string(&ErrorPayload::new(message)).unwrap_or_default();

        cors_builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .header("Content-Type", "application/json")
            .body(Body::from(payload))
    }

    pub fn build_preflight_response() -> Result<Response<Body>, http::Error> {
        cors_builder()
            .status(StatusCode::NO_CONTENT)
            .body(Body::Empty)
    }
}

/// Parses a request body as JSON. An empty body is parsed as the empty
/// string, so it fails like any other malformed payload.
pub fn parse_body<T: DeserializeOwned>(body: &Body) -> Result<T, serde_json::Error> {
    match body {
        Body::Text(value) => serde_json::from_str(value),
        Body::Binary(value) => serde_json::from_slice(value),
        Body::Empty => serde_json::from_str(""),
    }
}

pub fn body_size(body: &Body) -> usize {
    match body {
        Body::Text(value) => value.len(),
        Body::Binary(value) => value.len(),
        Body::Empty => 0,
    }
}
