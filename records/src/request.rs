//! Transport-neutral HTTP request description.
//!
//! SYSTEM CONTEXT
//! ==============
//! Endpoint builders produce [`ApiRequest`] values; a [`Transport`] turns them
//! into real HTTP calls. The browser uses `gloo-net`, the CLI uses `reqwest`,
//! and tests use a recording fake.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::detail::ApiError;
use crate::query::ListQuery;

/// Prefix shared by every backend route.
pub const API_PREFIX: &str = "/api";

/// HTTP verb of an [`ApiRequest`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One backend call: verb, absolute API path, optional list query and JSON body.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<ListQuery>,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: None, body: None }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    #[must_use]
    pub fn with_query(mut self, query: ListQuery) -> Self {
        self.query = Some(query);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Path plus encoded query string, relative to the backend origin.
    #[must_use]
    pub fn target(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query.to_query_string()),
            None => self.path.clone(),
        }
    }

    /// Full URL against `base_url` (trailing slashes on the base are ignored).
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.target())
    }
}

/// Decode a response body for a [`Transport`]: empty bodies are `null`,
/// non-JSON text is kept as a string so error extraction still has
/// something to look at.
#[must_use]
pub fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

/// Sends [`ApiRequest`]s and returns the decoded JSON body.
///
/// Implementations map non-2xx responses to [`ApiError::Status`] via
/// [`ApiError::from_response`], and empty success bodies to `Value::Null`.
/// Futures are not required to be `Send` so browser transports qualify.
#[async_trait(?Send)]
pub trait Transport {
    /// # Errors
    ///
    /// Returns [`ApiError`] when the call fails at any layer.
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        (**self).send(request).await
    }
}
