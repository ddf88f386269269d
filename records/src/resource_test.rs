use super::*;
use crate::model::RegistrationStatus;
use serde_json::json;

#[test]
fn collection_paths_match_backend_routes() {
    assert_eq!(collection_path::<Student>(), "/api/students");
    assert_eq!(collection_path::<VivaTeam>(), "/api/viva-teams");
    assert_eq!(collection_path::<User>(), "/api/admin/users");
}

#[test]
fn item_path_uses_record_key() {
    let registration = Registration { registration_id: 7, ..Registration::default() };
    assert_eq!(item_path::<Registration>(&registration.key()), "/api/registrations/7");
}

#[test]
fn item_path_encodes_key_as_one_segment() {
    assert_eq!(item_path::<Student>("PGR/24 001?x"), "/api/students/PGR%2F24%20001%3Fx");
    assert_eq!(
        action_request::<Registration>(" 7 ", "approve-extension", None).path,
        "/api/registrations/7/approve-extension"
    );
}

#[test]
fn list_request_carries_query() {
    let request = list_request::<Submission>(ListQuery::new().with_filter("status", "submitted"));
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.target(), "/api/submissions?skip=0&limit=100&status=submitted");
}

#[test]
fn crud_builders_pick_expected_verbs() {
    assert_eq!(get_request::<Supervisor>("4").method, Method::Get);
    assert_eq!(create_request::<Supervisor>(json!({})).method, Method::Post);
    assert_eq!(update_request::<Supervisor>("4", json!({})).method, Method::Put);
    let delete = delete_request::<Supervisor>("4");
    assert_eq!(delete.method, Method::Delete);
    assert_eq!(delete.path, "/api/supervisors/4");
    assert!(delete.body.is_none());
}

#[test]
fn action_request_appends_action_segment() {
    let request = action_request::<Registration>("7", "approve-extension", None);
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/api/registrations/7/approve-extension");
    assert!(request.body.is_none());

    let with_body = action_request::<VivaTeam>("3", "schedule", Some(json!({ "scheduled_date": "2025-05-01" })));
    assert_eq!(with_body.path, "/api/viva-teams/3/schedule");
    assert_eq!(with_body.body, Some(json!({ "scheduled_date": "2025-05-01" })));
}

#[test]
fn status_field_and_value_line_up() {
    let registration = Registration {
        registration_status: RegistrationStatus::ExtensionRequested,
        ..Registration::default()
    };
    assert_eq!(Registration::STATUS_FIELD, Some("registration_status"));
    assert_eq!(registration.status_value(), Some("extension_requested"));
    assert_eq!(Student::STATUS_FIELD, None);
    assert_eq!(Student::default().status_value(), None);
}

#[test]
fn student_search_fields_skip_missing_values() {
    let student = Student {
        student_number: "24001234".to_owned(),
        forename: "Ada".to_owned(),
        surname: "Lovelace".to_owned(),
        programme_of_study: Some("PhD Computing".to_owned()),
        ..Student::default()
    };
    assert_eq!(student.search_fields(), vec!["24001234", "Ada", "Lovelace", "PhD Computing"]);
}
