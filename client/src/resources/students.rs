//! Research student records.

use records::Student;

use super::{Column, ResourceView};
use crate::state::form::{FieldKind, FieldSpec};
use crate::util::format;

const MODES: &[(&str, &str)] = &[("full_time", "Full-time"), ("part_time", "Part-time")];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("student_number", "Student Number").required(),
    FieldSpec::text("title", "Title"),
    FieldSpec::text("forename", "Forename").required(),
    FieldSpec::text("middle_name", "Middle Name"),
    FieldSpec::text("surname", "Surname").required(),
    FieldSpec::new("email", "Email", FieldKind::Email),
    FieldSpec::text("cohort", "Cohort"),
    FieldSpec::text("course_code", "Course Code"),
    FieldSpec::text("programme_of_study", "Programme of Study"),
    FieldSpec::new("mode", "Mode", FieldKind::Select(MODES)),
    FieldSpec::new("international", "International", FieldKind::Checkbox),
    FieldSpec::new("previous_ehu_undergraduate", "Previous EHU Undergraduate", FieldKind::Checkbox),
    FieldSpec::new("previous_ehu_postgraduate", "Previous EHU Postgraduate", FieldKind::Checkbox),
    FieldSpec::new("notes", "Notes", FieldKind::TextArea),
];

impl ResourceView for Student {
    const TITLE: &'static str = "Students";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Student Number", |s: &Student| s.student_number.clone()),
            Column::new("Name", Student::full_name),
            Column::new("Programme", |s: &Student| format::text(s.programme_of_study.as_deref())),
            Column::new("Mode", |s: &Student| format::humanize(s.mode.as_deref())),
            Column::new("Cohort", |s: &Student| format::text(s.cohort.as_deref())),
            Column::new("Email", |s: &Student| format::text(s.email.as_deref())),
        ]
    }

    fn form_fields() -> &'static [FieldSpec] {
        FIELDS
    }
}
