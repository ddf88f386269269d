use super::*;
use records::{Method, Registration, RegistrationStatus, Student, Submission, SubmissionStatus, VivaTeam, VivaTeamStatus};
use serde_json::json;

fn registration(id: i64, status: RegistrationStatus) -> Registration {
    Registration { registration_id: id, student_number: "24001234".to_owned(), registration_status: status, ..Registration::default() }
}

// =============================================================
// Options
// =============================================================

#[test]
fn manage_permits_everything_and_read_only_nothing() {
    let record = registration(1, RegistrationStatus::ExtensionRequested);
    assert_eq!(PanelOptions::manage().actions_for(&record), record.row_actions());
    assert!(PanelOptions::read_only().actions_for(&record).is_empty());
    assert!(!PanelOptions::read_only().allow_create);
}

#[test]
fn with_actions_narrows_offered_actions() {
    let options = PanelOptions::manage().with_actions(&[RowAction::ApproveExtension]);
    assert_eq!(
        options.actions_for(&registration(1, RegistrationStatus::ExtensionRequested)),
        vec![RowAction::ApproveExtension]
    );
    assert!(options.actions_for(&registration(2, RegistrationStatus::Completed)).is_empty());
}

// =============================================================
// Intents
// =============================================================

#[test]
fn edit_opens_prefilled_update_form() {
    let student = Student {
        student_number: "24001234".to_owned(),
        forename: "Ada".to_owned(),
        surname: "Lovelace".to_owned(),
        ..Student::default()
    };
    let Intent::OpenForm(target, form) = intent_for(&student, RowAction::Edit) else {
        panic!("expected form");
    };
    assert_eq!(target.mode, FormMode::Update("24001234".to_owned()));
    assert_eq!(target.title, "Edit Student");
    assert_eq!(form.get("forename"), "Ada");
    let request = target.request::<Student>(json!({ "forename": "Augusta" }));
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.path, "/api/students/24001234");
}

#[test]
fn delete_requires_confirmation() {
    let Intent::Confirm(pending) = intent_for(&registration(3, RegistrationStatus::Pending), RowAction::Delete) else {
        panic!("expected confirmation");
    };
    assert_eq!(pending.request.method, Method::Delete);
    assert_eq!(pending.request.path, "/api/registrations/3");
}

#[test]
fn request_extension_opens_action_form() {
    let Intent::OpenForm(target, _) = intent_for(&registration(5, RegistrationStatus::Pending), RowAction::RequestExtension)
    else {
        panic!("expected form");
    };
    assert!(target.note.is_none());
    let request = target.request::<Registration>(json!({ "extension_length_days": 30, "extension_reason": "illness" }));
    assert_eq!(request.path, "/api/registrations/5/request-extension");
    assert_eq!(request.body.unwrap()["extension_length_days"], 30);
    assert_eq!(target.success_message::<Registration>(), "Registration extension requested");
}

#[test]
fn viva_team_approve_confirms_without_body() {
    let team = VivaTeam { id: 9, status: VivaTeamStatus::Proposed, ..VivaTeam::default() };
    let Intent::Confirm(pending) = intent_for(&team, RowAction::Approve) else {
        panic!("expected confirmation");
    };
    assert_eq!(pending.request.path, "/api/viva-teams/9/approve");
    assert!(pending.request.body.is_none());
}

#[test]
fn outcome_form_carries_warning_note() {
    let team = VivaTeam { id: 9, status: VivaTeamStatus::Scheduled, ..VivaTeam::default() };
    let Intent::OpenForm(target, _) = intent_for(&team, RowAction::RecordOutcome) else {
        panic!("expected form");
    };
    assert!(target.note.is_some());
    assert_eq!(target.request::<VivaTeam>(json!({ "outcome": "pass" })).path, "/api/viva-teams/9/outcome");
}

#[test]
fn submission_review_collects_comments() {
    let submission = Submission { id: 4, status: SubmissionStatus::Submitted, ..Submission::default() };
    let Intent::OpenForm(target, form) = intent_for(&submission, RowAction::RequestRevision) else {
        panic!("expected form");
    };
    assert_eq!(form.to_payload(target.fields).unwrap(), json!({ "review_comments": null }));
    assert_eq!(target.request::<Submission>(json!({})).path, "/api/submissions/4/request-revision");
}

#[test]
fn activate_runs_immediately() {
    let user = records::User { id: 12, is_active: false, ..records::User::default() };
    let Intent::Run { request, success } = intent_for(&user, RowAction::Activate) else {
        panic!("expected immediate run");
    };
    assert_eq!(request.path, "/api/admin/users/12/activate");
    assert_eq!(success, "User activated");
}

#[test]
fn create_target_posts_to_collection() {
    let target = FormTarget::create::<Student>();
    assert_eq!(target.title, "New Student");
    let request = target.request::<Student>(json!({ "student_number": "1" }));
    assert_eq!((request.method, request.path.as_str()), (Method::Post, "/api/students"));
    assert_eq!(target.success_message::<Student>(), "Student created");
}

// =============================================================
// Form submission
// =============================================================

#[test]
fn submission_approve_confirms_after_comments() {
    let submission = Submission { id: 4, status: SubmissionStatus::UnderReview, ..Submission::default() };
    let Intent::OpenForm(target, mut form) = intent_for(&submission, RowAction::Approve) else {
        panic!("expected form");
    };
    assert_eq!(target.submit_label(), "Continue");
    form.set("review_comments", "Well argued");
    let body = form.to_payload(target.fields).unwrap();

    let Intent::Confirm(pending) = target.submit_intent::<Submission>(body) else {
        panic!("expected confirmation");
    };
    assert_eq!(pending.request.path, "/api/submissions/4/approve");
    assert_eq!(pending.request.body.unwrap()["review_comments"], "Well argued");
    assert_eq!(pending.success, RowAction::Approve.success_message("submission"));
}

#[test]
fn viva_outcome_confirms_after_input() {
    let team = VivaTeam { id: 9, status: VivaTeamStatus::Scheduled, ..VivaTeam::default() };
    let Intent::OpenForm(target, _) = intent_for(&team, RowAction::RecordOutcome) else {
        panic!("expected form");
    };
    assert!(matches!(target.submit_intent::<VivaTeam>(json!({ "outcome": "pass" })), Intent::Confirm(_)));
}

#[test]
fn reversible_forms_submit_directly() {
    let Intent::OpenForm(target, _) = intent_for(&registration(5, RegistrationStatus::Pending), RowAction::RequestExtension)
    else {
        panic!("expected form");
    };
    assert_eq!(target.submit_label(), "Request Extension");
    let Intent::Run { request, success } =
        target.submit_intent::<Registration>(json!({ "extension_length_days": 30, "extension_reason": "illness" }))
    else {
        panic!("expected immediate run");
    };
    assert_eq!(request.path, "/api/registrations/5/request-extension");
    assert_eq!(success, "Registration extension requested");
    assert_eq!(FormTarget::create::<Student>().submit_label(), "Save");
}
