//! Backend resource shapes.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON field-for-field so serde stays the
//! only translation layer. Dates travel as ISO-8601 strings; the front end
//! never does date arithmetic. Optional and boolean fields default so older
//! backend payloads that omit them still decode.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ENUMS
// =============================================================================

/// Portal role attached to a user account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SystemAdmin,
    AcademicAdmin,
    GbosApprover,
    Supervisor,
    Student,
    /// Any role string this build does not know about.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SystemAdmin => "system_admin",
            Self::AcademicAdmin => "academic_admin",
            Self::GbosApprover => "gbos_approver",
            Self::Supervisor => "supervisor",
            Self::Student => "student",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SystemAdmin => "System Admin",
            Self::AcademicAdmin => "Academic Admin",
            Self::GbosApprover => "GBOS Admin",
            Self::Supervisor => "Supervisor",
            Self::Student => "Student",
            Self::Unknown => "Unknown",
        }
    }
}

/// Lifecycle of an annual registration record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    ExtensionRequested,
    ExtensionApproved,
    Completed,
}

impl RegistrationStatus {
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Approved,
        Self::Rejected,
        Self::ExtensionRequested,
        Self::ExtensionApproved,
        Self::Completed,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::ExtensionRequested => "extension_requested",
            Self::ExtensionApproved => "extension_approved",
            Self::Completed => "completed",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::ExtensionRequested => "Extension Requested",
            Self::ExtensionApproved => "Extension Approved",
            Self::Completed => "Completed",
        }
    }
}

/// Examination stage a viva or viva team belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VivaStage {
    #[default]
    Registration,
    Progression,
    Final,
}

impl VivaStage {
    pub const ALL: [Self; 3] = [Self::Registration, Self::Progression, Self::Final];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::Progression => "progression",
            Self::Final => "final",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Registration => "Registration",
            Self::Progression => "Progression",
            Self::Final => "Final",
        }
    }
}

/// Approval lifecycle of a proposed examining panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VivaTeamStatus {
    #[default]
    Proposed,
    Approved,
    Rejected,
    Scheduled,
    Completed,
}

impl VivaTeamStatus {
    pub const ALL: [Self; 5] = [Self::Proposed, Self::Approved, Self::Rejected, Self::Scheduled, Self::Completed];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Proposed => "proposed",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Proposed => "Proposed",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
        }
    }
}

/// Review lifecycle of a document submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
    RevisionRequired,
}

impl SubmissionStatus {
    pub const ALL: [Self; 6] = [
        Self::Draft,
        Self::Submitted,
        Self::UnderReview,
        Self::Approved,
        Self::Rejected,
        Self::RevisionRequired,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::UnderReview => "under_review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::RevisionRequired => "revision_required",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
            Self::UnderReview => "Under Review",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::RevisionRequired => "Revision Required",
        }
    }

    /// Whether a reviewer can still decide on the submission.
    #[must_use]
    pub fn is_reviewable(self) -> bool {
        matches!(self, Self::Submitted | Self::UnderReview)
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// A portal account as returned by `/api/auth/me` and `/api/admin/users`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Supervisor record linked to this account, for supervisor logins.
    #[serde(default)]
    pub supervisor_id: Option<i64>,
    /// Student record linked to this account, for student logins.
    #[serde(default)]
    pub student_number: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_true() -> bool {
    true
}

/// A postgraduate research student. Keyed by `student_number`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_number: String,
    #[serde(default)]
    pub title: Option<String>,
    pub forename: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub surname: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cohort: Option<String>,
    #[serde(default)]
    pub course_code: Option<String>,
    #[serde(default)]
    pub programme_of_study: Option<String>,
    /// Mode of study, e.g. `"full_time"` or `"part_time"`.
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub international: bool,
    #[serde(default)]
    pub previous_ehu_undergraduate: bool,
    #[serde(default)]
    pub previous_ehu_postgraduate: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Student {
    /// `"Forename Surname"`, with the middle name when present.
    #[must_use]
    pub fn full_name(&self) -> String {
        [Some(self.forename.as_str()), self.middle_name.as_deref(), Some(self.surname.as_str())]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// An academic supervisor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Supervisor {
    pub supervisor_id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Student ↔ supervisor link with the supervisor's role on that student.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub student_supervisor_id: i64,
    pub student_number: String,
    pub supervisor_id: i64,
    /// Supervisory role, e.g. `"director_of_studies"` or `"second_supervisor"`.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Annual (re-)registration record with deadline and extension metadata.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub registration_id: i64,
    pub student_number: String,
    #[serde(default)]
    pub registration_status: RegistrationStatus,
    #[serde(default)]
    pub original_deadline: Option<String>,
    #[serde(default)]
    pub revised_deadline: Option<String>,
    #[serde(default)]
    pub extension_request_date: Option<String>,
    #[serde(default)]
    pub extension_length_days: Option<i32>,
    #[serde(default)]
    pub extension_reason: Option<String>,
    #[serde(default)]
    pub extension_approved_by: Option<String>,
    #[serde(default)]
    pub extension_approval_date: Option<String>,
    #[serde(default)]
    pub registration_completed: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Registration {
    /// Deadline currently in force: the revised one if an extension moved it.
    #[must_use]
    pub fn effective_deadline(&self) -> Option<&str> {
        self.revised_deadline.as_deref().or(self.original_deadline.as_deref())
    }
}

/// Proposed examining panel for one viva stage.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VivaTeam {
    pub id: i64,
    pub student_number: String,
    #[serde(default)]
    pub stage: VivaStage,
    #[serde(default)]
    pub status: VivaTeamStatus,
    #[serde(default)]
    pub internal_examiner_1_id: Option<i64>,
    #[serde(default)]
    pub internal_examiner_2_id: Option<i64>,
    #[serde(default)]
    pub external_examiner_name: Option<String>,
    #[serde(default)]
    pub external_examiner_email: Option<String>,
    #[serde(default)]
    pub external_examiner_institution: Option<String>,
    #[serde(default)]
    pub proposed_date: Option<String>,
    #[serde(default)]
    pub scheduled_date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub outcome_notes: Option<String>,
}

/// A scheduled oral examination event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viva {
    pub viva_id: i64,
    pub student_number: String,
    #[serde(default)]
    pub stage: VivaStage,
    #[serde(default)]
    pub viva_type: Option<String>,
    #[serde(default)]
    pub viva_date: Option<String>,
    #[serde(default)]
    pub viva_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub student_confirmed: bool,
    #[serde(default)]
    pub examiners_confirmed: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// An uploaded document awaiting or past review.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub student_number: String,
    #[serde(default)]
    pub submission_type: Option<String>,
    pub title: String,
    #[serde(default)]
    pub status: SubmissionStatus,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_size: Option<i64>,
    #[serde(default)]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub reviewed_by: Option<String>,
    #[serde(default)]
    pub review_comments: Option<String>,
    #[serde(default)]
    pub review_deadline: Option<String>,
}

// =============================================================================
// ACTION PAYLOADS
// =============================================================================

/// Credentials posted to `/api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token pair returned by a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Body of a registration `request-extension` action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRequest {
    pub extension_length_days: i32,
    pub extension_reason: String,
}

/// Body of a viva team `schedule` action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VivaSchedule {
    pub scheduled_date: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Body of a viva team `outcome` action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VivaOutcome {
    pub outcome: String,
    #[serde(default)]
    pub outcome_notes: Option<String>,
}

/// Body of submission review actions (`approve`, `reject`, `request-revision`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDecision {
    #[serde(default)]
    pub review_comments: Option<String>,
}
