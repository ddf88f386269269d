//! Row actions offered by resource tables and the confirmation they require.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use records::ApiRequest;

/// Something a user can do to one table row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowAction {
    Edit,
    Delete,
    RequestExtension,
    ApproveExtension,
    Approve,
    Reject,
    RequestRevision,
    Schedule,
    RecordOutcome,
    Activate,
    Deactivate,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Edit => "Edit",
            Self::Delete => "Delete",
            Self::RequestExtension => "Request Extension",
            Self::ApproveExtension => "Approve Extension",
            Self::Approve => "Approve",
            Self::Reject => "Reject",
            Self::RequestRevision => "Request Revision",
            Self::Schedule => "Schedule",
            Self::RecordOutcome => "Record Outcome",
            Self::Activate => "Activate",
            Self::Deactivate => "Deactivate",
        }
    }

    /// Backend action path segment. `None` for plain CRUD.
    pub fn endpoint(self) -> Option<&'static str> {
        match self {
            Self::Edit | Self::Delete => None,
            Self::RequestExtension => Some("request-extension"),
            Self::ApproveExtension => Some("approve-extension"),
            Self::Approve => Some("approve"),
            Self::Reject => Some("reject"),
            Self::RequestRevision => Some("request-revision"),
            Self::Schedule => Some("schedule"),
            Self::RecordOutcome => Some("outcome"),
            Self::Activate => Some("activate"),
            Self::Deactivate => Some("deactivate"),
        }
    }

    /// Irreversible actions must be confirmed before they are sent.
    pub fn needs_confirmation(self) -> bool {
        matches!(self, Self::Delete | Self::ApproveExtension | Self::Approve | Self::Reject | Self::RecordOutcome)
    }

    /// Confirmation question for a record of kind `noun`.
    pub fn confirm_prompt(self, noun: &str) -> Option<String> {
        if !self.needs_confirmation() {
            return None;
        }
        Some(match self {
            Self::Delete => format!("Are you sure you want to delete this {noun}? This cannot be undone."),
            Self::RecordOutcome => format!("Record the outcome for this {noun}? It cannot be changed afterwards."),
            other => format!("{} this {noun}?", other.label()),
        })
    }

    pub fn is_danger(self) -> bool {
        matches!(self, Self::Delete | Self::Reject | Self::Deactivate)
    }

    /// Notice shown after the action succeeds.
    pub fn success_message(self, noun: &str) -> String {
        let done = match self {
            Self::Edit => "updated",
            Self::Delete => "deleted",
            Self::RequestExtension => "extension requested",
            Self::ApproveExtension => "extension approved",
            Self::Approve => "approved",
            Self::Reject => "rejected",
            Self::RequestRevision => "revision requested",
            Self::Schedule => "scheduled",
            Self::RecordOutcome => "outcome recorded",
            Self::Activate => "activated",
            Self::Deactivate => "deactivated",
        };
        format!("{} {done}", capitalize(noun))
    }
}

/// A confirmed-pending mutation held until the user answers the prompt.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingAction {
    pub title: String,
    pub prompt: String,
    pub request: ApiRequest,
    pub success: String,
    pub danger: bool,
}

impl PendingAction {
    pub fn new(action: RowAction, noun: &str, request: ApiRequest) -> Self {
        Self {
            title: format!("{} {}", action.label(), capitalize(noun)),
            prompt: action.confirm_prompt(noun).unwrap_or_else(|| format!("{} this {noun}?", action.label())),
            request,
            success: action.success_message(noun),
            danger: action.is_danger(),
        }
    }
}

/// `"viva team"` → `"Viva team"`.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}
