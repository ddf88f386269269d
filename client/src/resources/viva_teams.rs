//! Examining panels: proposal, approval, scheduling and outcome.

#[cfg(test)]
#[path = "viva_teams_test.rs"]
mod viva_teams_test;

use records::{VivaTeam, VivaTeamStatus};

use super::{Column, ResourceView};
use crate::state::action::RowAction;
use crate::state::form::{FieldKind, FieldSpec};
use crate::util::format;

pub(crate) const STAGES: &[(&str, &str)] =
    &[("registration", "Registration"), ("progression", "Progression"), ("final", "Final")];

const OUTCOMES: &[(&str, &str)] = &[
    ("pass", "Pass"),
    ("pass_minor_corrections", "Pass with minor corrections"),
    ("pass_major_corrections", "Pass with major corrections"),
    ("resubmit", "Resubmit"),
    ("fail", "Fail"),
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("student_number", "Student Number").required(),
    FieldSpec::new("stage", "Stage", FieldKind::Select(STAGES)).required(),
    FieldSpec::new("internal_examiner_1_id", "Internal Examiner 1 (supervisor ID)", FieldKind::Number),
    FieldSpec::new("internal_examiner_2_id", "Internal Examiner 2 (supervisor ID)", FieldKind::Number),
    FieldSpec::text("external_examiner_name", "External Examiner"),
    FieldSpec::new("external_examiner_email", "External Examiner Email", FieldKind::Email),
    FieldSpec::text("external_examiner_institution", "External Examiner Institution"),
    FieldSpec::new("proposed_date", "Proposed Date", FieldKind::Date),
];

const SCHEDULE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("scheduled_date", "Scheduled Date", FieldKind::Date).required(),
    FieldSpec::text("location", "Location"),
];

const OUTCOME_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("outcome", "Outcome", FieldKind::Select(OUTCOMES)).required(),
    FieldSpec::new("outcome_notes", "Notes", FieldKind::TextArea),
];

impl ResourceView for VivaTeam {
    const TITLE: &'static str = "Viva Teams";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Student", |t: &VivaTeam| t.student_number.clone()),
            Column::new("Stage", |t: &VivaTeam| t.stage.label().to_owned()),
            Column::new("Status", |t: &VivaTeam| t.status.label().to_owned()),
            Column::new("Internal Examiners", |t: &VivaTeam| {
                let ids = [t.internal_examiner_1_id, t.internal_examiner_2_id]
                    .into_iter()
                    .flatten()
                    .map(|id| id.to_string())
                    .collect::<Vec<_>>();
                if ids.is_empty() { format::EMPTY_CELL.to_owned() } else { ids.join(", ") }
            }),
            Column::new("External Examiner", |t: &VivaTeam| format::text(t.external_examiner_name.as_deref())),
            Column::new("Proposed", |t: &VivaTeam| format::date(t.proposed_date.as_deref())),
            Column::new("Scheduled", |t: &VivaTeam| format::date(t.scheduled_date.as_deref())),
            Column::new("Location", |t: &VivaTeam| format::text(t.location.as_deref())),
            Column::new("Outcome", |t: &VivaTeam| format::humanize(t.outcome.as_deref())),
        ]
    }

    fn form_fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        VivaTeamStatus::ALL.iter().map(|s| (s.as_str(), s.label())).collect()
    }

    fn row_actions(&self) -> Vec<RowAction> {
        let mut actions = vec![RowAction::Edit];
        match self.status {
            VivaTeamStatus::Proposed => actions.extend([RowAction::Approve, RowAction::Reject]),
            VivaTeamStatus::Approved => actions.push(RowAction::Schedule),
            VivaTeamStatus::Scheduled => actions.push(RowAction::RecordOutcome),
            VivaTeamStatus::Rejected | VivaTeamStatus::Completed => {}
        }
        actions.push(RowAction::Delete);
        actions
    }

    fn action_fields(action: RowAction) -> &'static [FieldSpec] {
        match action {
            RowAction::Schedule => SCHEDULE_FIELDS,
            RowAction::RecordOutcome => OUTCOME_FIELDS,
            _ => &[],
        }
    }
}
