//! Recording fake [`Transport`] for tests in this crate and its dependents.

use std::cell::RefCell;

use async_trait::async_trait;
use serde_json::Value;

use crate::detail::ApiError;
use crate::request::{ApiRequest, Method, Transport};

type Responder = Box<dyn Fn(&ApiRequest) -> Result<Value, ApiError>>;

/// Records every request and answers through a caller-supplied closure.
pub struct RecordingTransport {
    responder: Responder,
    sent: RefCell<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new(responder: impl Fn(&ApiRequest) -> Result<Value, ApiError> + 'static) -> Self {
        Self { responder: Box::new(responder), sent: RefCell::new(Vec::new()) }
    }

    /// Answers every request with a clone of `value`.
    pub fn always(value: Value) -> Self {
        Self::new(move |_| Ok(value.clone()))
    }

    /// Answers every request with `error`.
    pub fn failing(error: ApiError) -> Self {
        Self::new(move |_| Err(error.clone()))
    }

    /// Requests sent so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    /// `"METHOD /path"` for each request sent so far.
    pub fn calls(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|r| format!("{} {}", r.method, r.path)).collect()
    }

    /// Number of `GET` requests against exactly `path`.
    pub fn count_gets(&self, path: &str) -> usize {
        self.sent.borrow().iter().filter(|r| r.method == Method::Get && r.path == path).count()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let reply = (self.responder)(&request);
        self.sent.borrow_mut().push(request);
        reply
    }
}
