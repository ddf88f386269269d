//! Per-resource routing and search metadata.
//!
//! DESIGN
//! ======
//! Every backend collection follows the same REST layout, so one trait plus a
//! handful of generic builders replaces a hand-written client per resource.
//! Resource-specific actions are plain `POST {item}/{action}` requests.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::model::{Assignment, Registration, Student, Submission, Supervisor, User, Viva, VivaTeam};
use crate::query::{ListQuery, encode};
use crate::request::{API_PREFIX, ApiRequest, Method};

/// A backend collection and the record type it serves.
pub trait Resource: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    /// Collection path below `/api`, e.g. `"viva-teams"`.
    const COLLECTION: &'static str;
    /// Singular human noun, e.g. `"viva team"`.
    const NOUN: &'static str;
    /// Query parameter used for the status filter, if the resource has one.
    const STATUS_FIELD: Option<&'static str> = None;

    /// Path segment identifying one record.
    fn key(&self) -> String;

    /// Text fields matched by client-side search.
    fn search_fields(&self) -> Vec<&str>;

    /// Wire value of the record's status, for status filtering.
    fn status_value(&self) -> Option<&'static str> {
        None
    }
}

// =============================================================================
// REQUEST BUILDERS
// =============================================================================

/// `/api/{collection}`
#[must_use]
pub fn collection_path<R: Resource>() -> String {
    format!("{API_PREFIX}/{}", R::COLLECTION)
}

/// `/api/{collection}/{key}`, with the key percent-encoded as one segment.
#[must_use]
pub fn item_path<R: Resource>(key: &str) -> String {
    format!("{}/{}", collection_path::<R>(), encode(key.trim()))
}

#[must_use]
pub fn list_request<R: Resource>(query: ListQuery) -> ApiRequest {
    ApiRequest::get(collection_path::<R>()).with_query(query)
}

#[must_use]
pub fn get_request<R: Resource>(key: &str) -> ApiRequest {
    ApiRequest::get(item_path::<R>(key))
}

#[must_use]
pub fn create_request<R: Resource>(body: Value) -> ApiRequest {
    ApiRequest::post(collection_path::<R>()).with_body(body)
}

#[must_use]
pub fn update_request<R: Resource>(key: &str, body: Value) -> ApiRequest {
    ApiRequest::new(Method::Put, item_path::<R>(key)).with_body(body)
}

#[must_use]
pub fn delete_request<R: Resource>(key: &str) -> ApiRequest {
    ApiRequest::new(Method::Delete, item_path::<R>(key))
}

/// `POST /api/{collection}/{key}/{action}` with an optional JSON body.
#[must_use]
pub fn action_request<R: Resource>(key: &str, action: &str, body: Option<Value>) -> ApiRequest {
    let request = ApiRequest::post(format!("{}/{action}", item_path::<R>(key)));
    match body {
        Some(body) => request.with_body(body),
        None => request,
    }
}

// =============================================================================
// RESOURCE IMPLEMENTATIONS
// =============================================================================

fn opt(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str)
}

impl Resource for User {
    const COLLECTION: &'static str = "admin/users";
    const NOUN: &'static str = "user";
    const STATUS_FIELD: Option<&'static str> = Some("role");

    fn key(&self) -> String {
        self.id.to_string()
    }

    fn search_fields(&self) -> Vec<&str> {
        [Some(self.username.as_str()), opt(self.email.as_ref())].into_iter().flatten().collect()
    }

    fn status_value(&self) -> Option<&'static str> {
        Some(self.role.as_str())
    }
}

impl Resource for Student {
    const COLLECTION: &'static str = "students";
    const NOUN: &'static str = "student";

    fn key(&self) -> String {
        self.student_number.clone()
    }

    fn search_fields(&self) -> Vec<&str> {
        [
            Some(self.student_number.as_str()),
            Some(self.forename.as_str()),
            opt(self.middle_name.as_ref()),
            Some(self.surname.as_str()),
            opt(self.email.as_ref()),
            opt(self.programme_of_study.as_ref()),
            opt(self.course_code.as_ref()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Resource for Supervisor {
    const COLLECTION: &'static str = "supervisors";
    const NOUN: &'static str = "supervisor";

    fn key(&self) -> String {
        self.supervisor_id.to_string()
    }

    fn search_fields(&self) -> Vec<&str> {
        [Some(self.name.as_str()), opt(self.email.as_ref()), opt(self.department.as_ref())]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Resource for Assignment {
    const COLLECTION: &'static str = "assignments";
    const NOUN: &'static str = "assignment";

    fn key(&self) -> String {
        self.student_supervisor_id.to_string()
    }

    fn search_fields(&self) -> Vec<&str> {
        [Some(self.student_number.as_str()), opt(self.role.as_ref())].into_iter().flatten().collect()
    }
}

impl Resource for Registration {
    const COLLECTION: &'static str = "registrations";
    const NOUN: &'static str = "registration";
    const STATUS_FIELD: Option<&'static str> = Some("registration_status");

    fn key(&self) -> String {
        self.registration_id.to_string()
    }

    fn search_fields(&self) -> Vec<&str> {
        [Some(self.student_number.as_str()), opt(self.extension_reason.as_ref())].into_iter().flatten().collect()
    }

    fn status_value(&self) -> Option<&'static str> {
        Some(self.registration_status.as_str())
    }
}

impl Resource for VivaTeam {
    const COLLECTION: &'static str = "viva-teams";
    const NOUN: &'static str = "viva team";
    const STATUS_FIELD: Option<&'static str> = Some("status");

    fn key(&self) -> String {
        self.id.to_string()
    }

    fn search_fields(&self) -> Vec<&str> {
        [
            Some(self.student_number.as_str()),
            opt(self.external_examiner_name.as_ref()),
            opt(self.external_examiner_institution.as_ref()),
            opt(self.location.as_ref()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn status_value(&self) -> Option<&'static str> {
        Some(self.status.as_str())
    }
}

impl Resource for Viva {
    const COLLECTION: &'static str = "vivas";
    const NOUN: &'static str = "viva";
    const STATUS_FIELD: Option<&'static str> = Some("stage");

    fn key(&self) -> String {
        self.viva_id.to_string()
    }

    fn search_fields(&self) -> Vec<&str> {
        [Some(self.student_number.as_str()), opt(self.viva_type.as_ref()), opt(self.location.as_ref())]
            .into_iter()
            .flatten()
            .collect()
    }

    fn status_value(&self) -> Option<&'static str> {
        Some(self.stage.as_str())
    }
}

impl Resource for Submission {
    const COLLECTION: &'static str = "submissions";
    const NOUN: &'static str = "submission";
    const STATUS_FIELD: Option<&'static str> = Some("status");

    fn key(&self) -> String {
        self.id.to_string()
    }

    fn search_fields(&self) -> Vec<&str> {
        [Some(self.student_number.as_str()), Some(self.title.as_str()), opt(self.submission_type.as_ref())]
            .into_iter()
            .flatten()
            .collect()
    }

    fn status_value(&self) -> Option<&'static str> {
        Some(self.status.as_str())
    }
}
