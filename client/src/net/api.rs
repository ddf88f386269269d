//! Browser transport for the backend REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, carrying the stored
//! bearer token. Server-side (SSR): every call fails with
//! [`ApiError::Unavailable`] since data is only fetched in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx replies become [`ApiError::Status`] with the backend's `detail`
//! already reduced to one display string, so pages only ever show text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use records::{Api, ApiError, ApiRequest, Transport};
use serde_json::Value;

/// Stateless transport issuing `fetch` calls against the page origin.
///
/// Requests use relative `/api/...` paths; the portal host proxies them to
/// the backend so cookies and CORS never come into play.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

/// API client bound to the browser transport.
pub fn client() -> Api<BrowserTransport> {
    Api::new(BrowserTransport)
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            send_with_fetch(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send_with_fetch(request: ApiRequest) -> Result<Value, ApiError> {
    use gloo_net::http::Request;
    use records::Method;

    let target = request.target();
    let builder = match request.method {
        Method::Get => Request::get(&target),
        Method::Post => Request::post(&target),
        Method::Put => Request::put(&target),
        Method::Patch => Request::patch(&target),
        Method::Delete => Request::delete(&target),
    };
    let builder = builder.header("Accept", "application/json");
    let builder = match crate::util::session_store::load_token() {
        Some(token) => builder.header("Authorization", &bearer_header(&token)),
        None => builder,
    };

    let sent = match &request.body {
        Some(body) => builder.json(body).map_err(network_error)?.send().await,
        None => builder.send().await,
    };
    let response = sent.map_err(|e| {
        log::warn!("{} {target} failed: {e}", request.method);
        network_error(e)
    })?;

    let status = response.status();
    let ok = response.ok();
    let text = response.text().await.map_err(network_error)?;
    let body = records::parse_body(&text);
    if !ok {
        log::warn!("{} {target} returned {status}", request.method);
        return Err(ApiError::from_response(status, &body));
    }
    Ok(body)
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {}", token.trim())
}
