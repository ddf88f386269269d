//! Backend error bodies and their normalization to display strings.
//!
//! The backend reports failures as `{"detail": ...}` where `detail` is a plain
//! string, a list of validation objects carrying `msg`, or a nested object
//! carrying `message`/`msg`. Every caller wants one line of text.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use serde_json::Value;

/// Fallback shown when a failure carries no usable message.
pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Error returned by every [`crate::Transport`] and [`crate::Api`] call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected record shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The transport cannot run in this environment (e.g. during SSR).
    #[error("not available in this environment")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a raw response body, extracting `detail`.
    #[must_use]
    pub fn from_response(status: u16, body: &Value) -> Self {
        let fallback = format!("request failed with status {status}");
        Self::Status { status, message: extract_error_message(body, &fallback) }
    }

    /// One-line message for banners and alerts. Never empty.
    #[must_use]
    pub fn display_message(&self, fallback: &str) -> String {
        let message = match self {
            Self::Status { message, .. } => message.clone(),
            Self::Network(reason) | Self::Decode(reason) => reason.clone(),
            Self::Unavailable => String::new(),
        };
        if !message.trim().is_empty() {
            return message;
        }
        if !fallback.trim().is_empty() {
            return fallback.to_owned();
        }
        DEFAULT_ERROR_MESSAGE.to_owned()
    }

    /// HTTP status if the backend answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

/// Reduce a backend error body to one display string.
///
/// Looks at the body's `detail` field: a string is returned as-is, an array
/// yields each item's `msg` joined with `"; "`, an object yields its
/// `message` or `msg`. Anything else returns `default`.
#[must_use]
pub fn extract_error_message(body: &Value, default: &str) -> String {
    body.get("detail")
        .and_then(detail_text)
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| default.to_owned())
}

fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => {
            let parts = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text.clone()),
                    Value::Object(_) => object_text(item),
                    _ => None,
                })
                .filter(|part| !part.trim().is_empty())
                .collect::<Vec<_>>();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        Value::Object(_) => object_text(detail),
        _ => None,
    }
}

fn object_text(value: &Value) -> Option<String> {
    ["msg", "message"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_owned)
}
