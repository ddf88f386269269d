use super::*;
use serde_json::json;

#[test]
fn string_detail_is_returned_verbatim() {
    let body = json!({ "detail": "Student not found" });
    assert_eq!(extract_error_message(&body, "fallback"), "Student not found");
}

#[test]
fn validation_array_joins_each_msg() {
    let body = json!({
        "detail": [
            { "loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error" },
            { "loc": ["body", "cohort"], "msg": "field required", "type": "missing" }
        ]
    });
    assert_eq!(
        extract_error_message(&body, "fallback"),
        "value is not a valid email address; field required"
    );
}

#[test]
fn array_items_without_msg_are_skipped() {
    let body = json!({ "detail": [{ "loc": ["query"] }, "plain text", 42] });
    assert_eq!(extract_error_message(&body, "fallback"), "plain text");
}

#[test]
fn object_detail_prefers_msg_then_message() {
    let with_message = json!({ "detail": { "message": "Deadline already passed" } });
    assert_eq!(extract_error_message(&with_message, "fallback"), "Deadline already passed");

    let with_msg = json!({ "detail": { "msg": "Duplicate student number" } });
    assert_eq!(extract_error_message(&with_msg, "fallback"), "Duplicate student number");
}

#[test]
fn unknown_shapes_fall_back_to_default() {
    for body in [
        json!({}),
        json!(null),
        json!({ "detail": null }),
        json!({ "detail": 500 }),
        json!({ "detail": "" }),
        json!({ "detail": [] }),
        json!({ "detail": { "code": "E1" } }),
        json!({ "error": "something" }),
    ] {
        assert_eq!(extract_error_message(&body, "Failed to load students"), "Failed to load students");
    }
}

#[test]
fn from_response_uses_status_fallback_without_detail() {
    let err = ApiError::from_response(503, &json!(null));
    assert_eq!(
        err,
        ApiError::Status { status: 503, message: "request failed with status 503".to_owned() }
    );
    assert_eq!(err.status(), Some(503));
}

#[test]
fn display_message_is_never_empty() {
    assert_eq!(ApiError::Unavailable.display_message("Failed to save"), "Failed to save");
    assert_eq!(ApiError::Unavailable.display_message("  "), DEFAULT_ERROR_MESSAGE);
    assert_eq!(ApiError::Network("connection refused".to_owned()).display_message("x"), "connection refused");
    let status = ApiError::Status { status: 400, message: String::new() };
    assert_eq!(status.display_message("Failed to save"), "Failed to save");
}

#[test]
fn serde_errors_convert_to_decode() {
    let err: ApiError = serde_json::from_str::<u32>("\"nope\"").unwrap_err().into();
    assert!(matches!(err, ApiError::Decode(_)));
    assert_eq!(err.status(), None);
}
