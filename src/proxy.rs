//! Same-origin forwarding of `/api/*` to the PGR backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to this host. Every `/api/*` request is replayed
//! against `PGR_API_URL` with its method, path, query, body and the headers
//! the backend cares about; the upstream status and body come back untouched.
//!
//! ERROR HANDLING
//! ==============
//! If the backend cannot be reached the caller gets `502` with a
//! `{"detail": "..."}` body, the same shape the backend uses for its own
//! errors, so the client's message extraction needs no special case.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Request headers copied to the backend.
const FORWARDED_HEADERS: [header::HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

#[derive(Clone, Debug)]
pub struct ProxyState {
    client: reqwest::Client,
    api_url: String,
}

impl ProxyState {
    /// # Errors
    ///
    /// Returns the underlying error if the HTTP client cannot be built.
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_url: api_url.into() })
    }

    /// Upstream URL for a host-relative path and query.
    pub fn upstream_url(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.api_url)
    }
}

/// Forward one `/api/*` request and relay the backend's answer.
pub async fn forward(State(state): State<ProxyState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let target = parts.uri.path_and_query().map_or_else(|| parts.uri.path().to_owned(), ToString::to_string);

    let body = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(%target, error = %e, "proxy: request body rejected");
            return detail_response(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large");
        }
    };

    let url = state.upstream_url(&target);
    let mut upstream = state.client.request(parts.method.clone(), &url).headers(forwarded_headers(&parts.headers));
    if !body.is_empty() {
        upstream = upstream.body(body);
    }

    let response = match upstream.send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(method = %parts.method, %target, error = %e, "proxy: backend unreachable");
            return detail_response(StatusCode::BAD_GATEWAY, "Backend unavailable");
        }
    };

    let status = response.status();
    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(method = %parts.method, %target, error = %e, "proxy: backend response truncated");
            return detail_response(StatusCode::BAD_GATEWAY, "Backend response could not be read");
        }
    };

    if status.is_server_error() {
        tracing::warn!(method = %parts.method, %target, status = status.as_u16(), "proxy: backend error");
    }
    relay(status, content_type, bytes)
}

fn forwarded_headers(incoming: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for name in &FORWARDED_HEADERS {
        if let Some(value) = incoming.get(name) {
            headers.insert(name.clone(), value.clone());
        }
    }
    headers
}

fn relay(status: StatusCode, content_type: Option<header::HeaderValue>, bytes: Bytes) -> Response {
    let mut response = (status, Body::from(bytes)).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    response
}

fn detail_response(status: StatusCode, detail: &str) -> Response {
    (status, axum::Json(json!({ "detail": detail }))).into_response()
}
