//! Portal accounts, managed by system admins.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use records::User;

use super::{Column, ResourceView};
use crate::state::action::RowAction;
use crate::state::form::{FieldKind, FieldSpec};
use crate::util::format;

const ROLES: &[(&str, &str)] = &[
    ("system_admin", "System Admin"),
    ("academic_admin", "Academic Admin"),
    ("gbos_approver", "GBOS Admin"),
    ("supervisor", "Supervisor"),
    ("student", "Student"),
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("username", "Username").required(),
    FieldSpec::new("email", "Email", FieldKind::Email),
    FieldSpec::new("password", "Password", FieldKind::Password),
    FieldSpec::new("role", "Role", FieldKind::Select(ROLES)).required(),
    FieldSpec::new("supervisor_id", "Supervisor ID", FieldKind::Number),
    FieldSpec::text("student_number", "Student Number"),
    FieldSpec::new("is_active", "Active", FieldKind::Checkbox),
];

impl ResourceView for User {
    const TITLE: &'static str = "Users";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Username", |u: &User| u.username.clone()),
            Column::new("Email", |u: &User| format::text(u.email.as_deref())),
            Column::new("Role", |u: &User| u.role.label().to_owned()),
            Column::new("Active", |u: &User| format::yes_no(u.is_active)),
            Column::new("Created", |u: &User| format::date(u.created_at.as_deref())),
        ]
    }

    fn form_fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        ROLES.to_vec()
    }

    fn row_actions(&self) -> Vec<RowAction> {
        let toggle = if self.is_active { RowAction::Deactivate } else { RowAction::Activate };
        vec![RowAction::Edit, toggle, RowAction::Delete]
    }
}
