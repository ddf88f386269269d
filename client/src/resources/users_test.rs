use super::*;
use crate::state::panel::{Intent, intent_for};

#[test]
fn active_user_offers_deactivate() {
    let user = User { id: 1, username: "admin".to_owned(), is_active: true, ..User::default() };
    assert_eq!(user.row_actions(), vec![RowAction::Edit, RowAction::Deactivate, RowAction::Delete]);
}

#[test]
fn inactive_user_offers_activate() {
    let user = User { id: 2, username: "old".to_owned(), is_active: false, ..User::default() };
    assert!(user.row_actions().contains(&RowAction::Activate));
}

#[test]
fn role_column_uses_label_and_filter_lists_roles() {
    let user = User { role: records::Role::GbosApprover, ..User::default() };
    let role = User::columns().into_iter().find(|c| c.header == "Role").unwrap();
    assert_eq!((role.cell)(&user), "GBOS Admin");
    assert_eq!(User::status_options().len(), 5);
    assert_eq!(User::search_placeholder(), "Search users…");
}

#[test]
fn edit_payload_keeps_stored_password() {
    let user = User {
        id: 9,
        username: "u".to_owned(),
        role: records::Role::Supervisor,
        supervisor_id: Some(4),
        ..User::default()
    };
    let Intent::OpenForm(target, form) = intent_for(&user, RowAction::Edit) else {
        panic!("expected form");
    };
    let body = form.to_payload(target.fields).unwrap();
    assert!(body.get("password").is_none());
    assert_eq!(body["role"], "supervisor");
    assert_eq!(body["supervisor_id"], 4);
}
