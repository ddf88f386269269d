//! Student to supervisor assignments.

use records::Assignment;

use super::{Column, ResourceView};
use crate::state::form::{FieldKind, FieldSpec};
use crate::util::format;

const SUPERVISORY_ROLES: &[(&str, &str)] = &[
    ("director_of_studies", "Director of Studies"),
    ("second_supervisor", "Second Supervisor"),
    ("advisor", "Advisor"),
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("student_number", "Student Number").required(),
    FieldSpec::new("supervisor_id", "Supervisor ID", FieldKind::Number).required(),
    FieldSpec::new("role", "Role", FieldKind::Select(SUPERVISORY_ROLES)).required(),
    FieldSpec::new("start_date", "Start Date", FieldKind::Date),
    FieldSpec::new("end_date", "End Date", FieldKind::Date),
    FieldSpec::new("notes", "Notes", FieldKind::TextArea),
];

impl ResourceView for Assignment {
    const TITLE: &'static str = "Assignments";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Student", |a: &Assignment| a.student_number.clone()),
            Column::new("Supervisor ID", |a: &Assignment| a.supervisor_id.to_string()),
            Column::new("Role", |a: &Assignment| format::humanize(a.role.as_deref())),
            Column::new("Start", |a: &Assignment| format::date(a.start_date.as_deref())),
            Column::new("End", |a: &Assignment| format::date(a.end_date.as_deref())),
        ]
    }

    fn form_fields() -> &'static [FieldSpec] {
        FIELDS
    }
}
