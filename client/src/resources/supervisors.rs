//! Academic supervisors.

use records::Supervisor;

use super::{Column, ResourceView};
use crate::state::form::{FieldKind, FieldSpec};
use crate::util::format;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name").required(),
    FieldSpec::new("email", "Email", FieldKind::Email),
    FieldSpec::text("department", "Department"),
    FieldSpec::new("notes", "Notes", FieldKind::TextArea),
];

impl ResourceView for Supervisor {
    const TITLE: &'static str = "Supervisors";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("ID", |s: &Supervisor| s.supervisor_id.to_string()),
            Column::new("Name", |s: &Supervisor| s.name.clone()),
            Column::new("Email", |s: &Supervisor| format::text(s.email.as_deref())),
            Column::new("Department", |s: &Supervisor| format::text(s.department.as_deref())),
        ]
    }

    fn form_fields() -> &'static [FieldSpec] {
        FIELDS
    }
}
