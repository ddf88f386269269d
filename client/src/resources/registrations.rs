//! Annual registrations and their deadline extensions.

#[cfg(test)]
#[path = "registrations_test.rs"]
mod registrations_test;

use records::{Registration, RegistrationStatus};

use super::{Column, ResourceView};
use crate::state::action::RowAction;
use crate::state::form::{FieldKind, FieldSpec};
use crate::util::format;

const STATUSES: &[(&str, &str)] = &[
    ("pending", "Pending"),
    ("approved", "Approved"),
    ("rejected", "Rejected"),
    ("extension_requested", "Extension Requested"),
    ("extension_approved", "Extension Approved"),
    ("completed", "Completed"),
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("student_number", "Student Number").required(),
    FieldSpec::new("registration_status", "Status", FieldKind::Select(STATUSES)).required(),
    FieldSpec::new("original_deadline", "Original Deadline", FieldKind::Date),
    FieldSpec::new("revised_deadline", "Revised Deadline", FieldKind::Date),
    FieldSpec::new("registration_completed", "Registration Completed", FieldKind::Checkbox),
    FieldSpec::new("notes", "Notes", FieldKind::TextArea),
];

const EXTENSION_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("extension_length_days", "Extension (days)", FieldKind::Number).required(),
    FieldSpec::new("extension_reason", "Reason", FieldKind::TextArea).required(),
];

impl ResourceView for Registration {
    const TITLE: &'static str = "Registrations";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Student", |r: &Registration| r.student_number.clone()),
            Column::new("Status", |r: &Registration| r.registration_status.label().to_owned()),
            Column::new("Deadline", |r: &Registration| format::date(r.effective_deadline())),
            Column::new("Original Deadline", |r: &Registration| format::date(r.original_deadline.as_deref())),
            Column::new("Extension (days)", |r: &Registration| format::number(r.extension_length_days)),
            Column::new("Extension Reason", |r: &Registration| format::text(r.extension_reason.as_deref())),
            Column::new("Completed", |r: &Registration| format::yes_no(r.registration_completed)),
        ]
    }

    fn form_fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        RegistrationStatus::ALL.iter().map(|s| (s.as_str(), s.label())).collect()
    }

    fn row_actions(&self) -> Vec<RowAction> {
        let mut actions = vec![RowAction::Edit];
        match self.registration_status {
            RegistrationStatus::Pending | RegistrationStatus::Approved => actions.push(RowAction::RequestExtension),
            RegistrationStatus::ExtensionRequested => actions.push(RowAction::ApproveExtension),
            _ => {}
        }
        actions.push(RowAction::Delete);
        actions
    }

    fn action_fields(action: RowAction) -> &'static [FieldSpec] {
        match action {
            RowAction::RequestExtension => EXTENSION_FIELDS,
            _ => &[],
        }
    }
}
