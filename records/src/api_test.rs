use super::*;
use crate::model::{RegistrationStatus, SubmissionStatus};
use crate::request::Method;
use crate::testing::RecordingTransport;
use futures::executor::block_on;
use serde_json::json;

fn registration_json(id: i64, status: &str) -> Value {
    json!({ "registration_id": id, "student_number": "24001234", "registration_status": status })
}

#[test]
fn list_decodes_records_and_sends_query() {
    let api = Api::new(RecordingTransport::always(json!([
        { "student_number": "1", "forename": "Ada", "surname": "Lovelace" },
        { "student_number": "2", "forename": "Alan", "surname": "Turing" }
    ])));
    let students = block_on(api.students().list(&ListQuery::new().with_search("a"))).unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[1].surname, "Turing");

    let sent = api.transport().requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].target(), "/api/students?skip=0&limit=100&search=a");
}

#[test]
fn list_with_wrong_shape_is_decode_error() {
    let api = Api::new(RecordingTransport::always(json!({ "items": [] })));
    let err = block_on(api.supervisors().list(&ListQuery::new())).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn create_posts_payload_to_collection() {
    let api = Api::new(RecordingTransport::always(json!({ "supervisor_id": 9, "name": "Dr Who" })));
    let created = block_on(api.supervisors().create(&json!({ "name": "Dr Who" }))).unwrap();
    assert_eq!(created.supervisor_id, 9);

    let sent = api.transport().requests();
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].path, "/api/supervisors");
    assert_eq!(sent[0].body, Some(json!({ "name": "Dr Who" })));
}

#[test]
fn delete_ignores_body() {
    let api = Api::new(RecordingTransport::always(Value::Null));
    block_on(api.assignments().delete("12")).unwrap();
    assert_eq!(api.transport().calls(), vec!["DELETE /api/assignments/12"]);
}

#[test]
fn approve_extension_posts_to_action_path() {
    let api = Api::new(RecordingTransport::always(registration_json(7, "extension_approved")));
    let updated = block_on(api.registrations().approve_extension(7)).unwrap();
    assert_eq!(updated.registration_status, RegistrationStatus::ExtensionApproved);
    assert_eq!(api.transport().calls(), vec!["POST /api/registrations/7/approve-extension"]);
}

#[test]
fn request_extension_sends_body() {
    let api = Api::new(RecordingTransport::always(registration_json(7, "extension_requested")));
    let request = ExtensionRequest { extension_length_days: 30, extension_reason: "Illness".to_owned() };
    block_on(api.registrations().request_extension(7, &request)).unwrap();
    let sent = api.transport().requests();
    assert_eq!(sent[0].path, "/api/registrations/7/request-extension");
    assert_eq!(sent[0].body, Some(json!({ "extension_length_days": 30, "extension_reason": "Illness" })));
}

#[test]
fn viva_team_actions_hit_distinct_paths() {
    let api = Api::new(RecordingTransport::always(json!({ "id": 3, "student_number": "s" })));
    let teams = api.viva_teams();
    block_on(teams.approve(3)).unwrap();
    block_on(teams.reject(3)).unwrap();
    block_on(teams.schedule(3, &VivaSchedule { scheduled_date: "2025-06-01".to_owned(), location: None })).unwrap();
    block_on(teams.submit_outcome(3, &VivaOutcome { outcome: "pass".to_owned(), outcome_notes: None })).unwrap();
    assert_eq!(
        api.transport().calls(),
        vec![
            "POST /api/viva-teams/3/approve",
            "POST /api/viva-teams/3/reject",
            "POST /api/viva-teams/3/schedule",
            "POST /api/viva-teams/3/outcome",
        ]
    );
}

#[test]
fn submission_review_actions_carry_comments() {
    let api = Api::new(RecordingTransport::always(json!({
        "id": 5, "student_number": "s", "title": "Thesis", "status": "rejected"
    })));
    let decision = ReviewDecision { review_comments: Some("Missing chapter 4".to_owned()) };
    let rejected = block_on(api.submissions().reject(5, &decision)).unwrap();
    assert_eq!(rejected.status, SubmissionStatus::Rejected);
    let sent = api.transport().requests();
    assert_eq!(sent[0].path, "/api/submissions/5/reject");
    assert_eq!(sent[0].body, Some(json!({ "review_comments": "Missing chapter 4" })));
}

#[test]
fn set_active_picks_action_by_flag() {
    let api = Api::new(RecordingTransport::always(json!({ "id": 2, "username": "u" })));
    block_on(api.users().set_active(2, false)).unwrap();
    block_on(api.users().set_active(2, true)).unwrap();
    assert_eq!(
        api.transport().calls(),
        vec!["POST /api/admin/users/2/deactivate", "POST /api/admin/users/2/activate"]
    );
}

#[test]
fn login_posts_credentials_and_returns_session() {
    let api = Api::new(RecordingTransport::always(json!({ "access_token": "tok", "token_type": "bearer" })));
    let session = block_on(api.login("admin", "secret")).unwrap();
    assert_eq!(session.access_token, "tok");
    let sent = api.transport().requests();
    assert_eq!(sent[0].path, "/api/auth/login");
    assert_eq!(sent[0].body, Some(json!({ "username": "admin", "password": "secret" })));
}

#[test]
fn current_user_propagates_status_error() {
    let api = Api::new(RecordingTransport::failing(ApiError::from_response(
        401,
        &json!({ "detail": "Not authenticated" }),
    )));
    let err = block_on(api.current_user()).unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.display_message("fallback"), "Not authenticated");
}
