use super::*;
use crate::testing::RecordingTransport;
use futures::executor::block_on;
use serde_json::json;

fn fake_backend() -> RecordingTransport {
    RecordingTransport::new(|request| match request.path.as_str() {
        "/api/students" => Ok(json!([
            { "student_number": "1", "forename": "A", "surname": "B" },
            { "student_number": "2", "forename": "C", "surname": "D" }
        ])),
        "/api/supervisors" => Ok(json!([{ "supervisor_id": 1, "name": "Dr X" }])),
        "/api/registrations" => Ok(json!([
            { "registration_id": 1, "student_number": "1", "registration_status": "pending" },
            { "registration_id": 2, "student_number": "2", "registration_status": "extension_requested" },
            { "registration_id": 3, "student_number": "2", "registration_status": "pending" }
        ])),
        other => Err(ApiError::Network(format!("unexpected path {other}"))),
    })
}

#[test]
fn stats_aggregate_three_lists() {
    let api = Api::new(fake_backend());
    let stats = block_on(api.dashboard_stats()).unwrap();
    assert_eq!(
        stats,
        DashboardStats {
            students: 2,
            supervisors: 1,
            registrations: 3,
            pending_registrations: 2,
            extension_requests: 1,
        }
    );
    assert_eq!(api.transport().requests().len(), 3);
}

#[test]
fn stats_use_large_page() {
    let api = Api::new(fake_backend());
    block_on(api.dashboard_stats()).unwrap();
    for request in api.transport().requests() {
        assert_eq!(request.query.as_ref().map(|q| q.limit), Some(STATS_LIMIT));
    }
}

#[test]
fn any_failure_fails_the_whole_aggregation() {
    let api = Api::new(RecordingTransport::new(|request| {
        if request.path == "/api/supervisors" {
            Err(ApiError::from_response(500, &json!({ "detail": "db down" })))
        } else {
            Ok(json!([]))
        }
    }));
    let err = block_on(api.dashboard_stats()).unwrap_err();
    assert_eq!(err.display_message("x"), "db down");
}

#[test]
fn from_lists_on_empty_inputs_is_zero() {
    assert_eq!(DashboardStats::from_lists(&[], &[], &[]), DashboardStats::default());
}
