use super::*;
use std::cell::RefCell;

use futures::executor::block_on;
use records::testing::RecordingTransport;
use records::{Api, Method};
use serde_json::json;

use crate::state::panel::{Intent, PanelOptions, intent_for};
use crate::state::table::{TableState, perform, refresh};

fn registration(id: i64, status: RegistrationStatus) -> Registration {
    Registration { registration_id: id, student_number: "24001234".to_owned(), registration_status: status, ..Registration::default() }
}

#[test]
fn actions_follow_status() {
    assert_eq!(
        registration(1, RegistrationStatus::Pending).row_actions(),
        vec![RowAction::Edit, RowAction::RequestExtension, RowAction::Delete]
    );
    assert_eq!(
        registration(1, RegistrationStatus::ExtensionRequested).row_actions(),
        vec![RowAction::Edit, RowAction::ApproveExtension, RowAction::Delete]
    );
    assert_eq!(registration(1, RegistrationStatus::Completed).row_actions(), vec![RowAction::Edit, RowAction::Delete]);
}

#[test]
fn deadline_column_prefers_revised_deadline() {
    let mut record = registration(1, RegistrationStatus::ExtensionApproved);
    record.original_deadline = Some("2025-01-31".to_owned());
    record.revised_deadline = Some("2025-03-02T00:00:00".to_owned());
    let deadline = Registration::columns().into_iter().find(|c| c.header == "Deadline").unwrap();
    assert_eq!((deadline.cell)(&record), "2025-03-02");
}

#[test]
fn status_filter_lists_every_status() {
    let options = Registration::status_options();
    assert_eq!(options.len(), 6);
    assert!(options.contains(&("extension_requested", "Extension Requested")));
}

#[test]
fn approving_requested_extension_posts_then_refetches() {
    let api = Api::new(RecordingTransport::new(|request| match request.method {
        Method::Get => Ok(json!([{
            "registration_id": 7,
            "student_number": "24001234",
            "registration_status": "extension_requested"
        }])),
        _ => Ok(json!({ "registration_id": 7, "student_number": "24001234", "registration_status": "extension_approved" })),
    }));
    let store = RefCell::new(TableState::<Registration>::default());
    block_on(refresh(&api, &store));

    let record = store.borrow().visible()[0].clone();
    let offered = PanelOptions::manage().actions_for(&record);
    assert!(offered.contains(&RowAction::ApproveExtension));
    assert_eq!(RowAction::ApproveExtension.label(), "Approve Extension");

    let Intent::Confirm(pending) = intent_for(&record, RowAction::ApproveExtension) else {
        panic!("approve extension must be confirmed");
    };
    assert!(!pending.prompt.is_empty());
    assert!(block_on(perform(&api, &store, pending.request, &pending.success)));

    assert_eq!(
        api.transport().calls(),
        vec!["GET /api/registrations", "POST /api/registrations/7/approve-extension", "GET /api/registrations"]
    );
    assert_eq!(store.borrow().notice.as_deref(), Some("Registration extension approved"));
}
