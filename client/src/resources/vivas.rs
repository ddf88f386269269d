//! Scheduled viva events.

use records::{Viva, VivaStage};

use super::viva_teams::STAGES;
use super::{Column, ResourceView};
use crate::state::form::{FieldKind, FieldSpec};
use crate::util::format;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("student_number", "Student Number").required(),
    FieldSpec::new("stage", "Stage", FieldKind::Select(STAGES)).required(),
    FieldSpec::text("viva_type", "Viva Type"),
    FieldSpec::new("viva_date", "Date", FieldKind::Date),
    FieldSpec::new("viva_time", "Time", FieldKind::Time),
    FieldSpec::text("location", "Location"),
    FieldSpec::new("student_confirmed", "Student Confirmed", FieldKind::Checkbox),
    FieldSpec::new("examiners_confirmed", "Examiners Confirmed", FieldKind::Checkbox),
    FieldSpec::new("notes", "Notes", FieldKind::TextArea),
];

impl ResourceView for Viva {
    const TITLE: &'static str = "Vivas";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Student", |v: &Viva| v.student_number.clone()),
            Column::new("Stage", |v: &Viva| v.stage.label().to_owned()),
            Column::new("Type", |v: &Viva| format::humanize(v.viva_type.as_deref())),
            Column::new("Date", |v: &Viva| format::date(v.viva_date.as_deref())),
            Column::new("Time", |v: &Viva| format::text(v.viva_time.as_deref())),
            Column::new("Location", |v: &Viva| format::text(v.location.as_deref())),
            Column::new("Student Confirmed", |v: &Viva| format::yes_no(v.student_confirmed)),
            Column::new("Examiners Confirmed", |v: &Viva| format::yes_no(v.examiners_confirmed)),
        ]
    }

    fn form_fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        VivaStage::ALL.iter().map(|s| (s.as_str(), s.label())).collect()
    }
}
