//! Document submissions and their review.

#[cfg(test)]
#[path = "submissions_test.rs"]
mod submissions_test;

use records::{Submission, SubmissionStatus};

use super::{Column, ResourceView};
use crate::state::action::RowAction;
use crate::state::form::{FieldKind, FieldSpec};
use crate::util::format;

const TYPES: &[(&str, &str)] = &[
    ("registration_report", "Registration Report"),
    ("progression_report", "Progression Report"),
    ("thesis", "Thesis"),
    ("corrections", "Corrections"),
    ("other", "Other"),
];

const STATUSES: &[(&str, &str)] = &[
    ("draft", "Draft"),
    ("submitted", "Submitted"),
    ("under_review", "Under Review"),
    ("approved", "Approved"),
    ("rejected", "Rejected"),
    ("revision_required", "Revision Required"),
];

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("student_number", "Student Number").required(),
    FieldSpec::text("title", "Title").required(),
    FieldSpec::new("submission_type", "Type", FieldKind::Select(TYPES)),
    FieldSpec::new("status", "Status", FieldKind::Select(STATUSES)).required(),
    FieldSpec::new("review_deadline", "Review Deadline", FieldKind::Date),
];

const REVIEW_FIELDS: &[FieldSpec] = &[FieldSpec::new("review_comments", "Review Comments", FieldKind::TextArea)];

impl ResourceView for Submission {
    const TITLE: &'static str = "Submissions";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("Student", |s: &Submission| s.student_number.clone()),
            Column::new("Title", |s: &Submission| s.title.clone()),
            Column::new("Type", |s: &Submission| format::humanize(s.submission_type.as_deref())),
            Column::new("Status", |s: &Submission| s.status.label().to_owned()),
            Column::new("File", |s: &Submission| match s.file_name.as_deref() {
                Some(name) => format!("{name} ({})", format::bytes(s.file_size)),
                None => format::EMPTY_CELL.to_owned(),
            }),
            Column::new("Submitted", |s: &Submission| format::date(s.submitted_at.as_deref())),
            Column::new("Review Deadline", |s: &Submission| format::date(s.review_deadline.as_deref())),
            Column::new("Comments", |s: &Submission| format::text(s.review_comments.as_deref())),
        ]
    }

    fn form_fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        SubmissionStatus::ALL.iter().map(|s| (s.as_str(), s.label())).collect()
    }

    fn row_actions(&self) -> Vec<RowAction> {
        let mut actions = vec![RowAction::Edit];
        if self.status.is_reviewable() {
            actions.extend([RowAction::Approve, RowAction::Reject, RowAction::RequestRevision]);
        }
        actions.push(RowAction::Delete);
        actions
    }

    fn action_fields(action: RowAction) -> &'static [FieldSpec] {
        match action {
            RowAction::Approve | RowAction::Reject | RowAction::RequestRevision => REVIEW_FIELDS,
            _ => &[],
        }
    }
}
