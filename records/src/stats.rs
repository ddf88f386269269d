//! Dashboard headline counts.
//!
//! The three list calls run concurrently and are joined all-or-nothing: the
//! first failure short-circuits the aggregation and no partial counts are
//! reported.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use futures::future::try_join3;
use serde::{Deserialize, Serialize};

use crate::api::Api;
use crate::detail::ApiError;
use crate::model::{Registration, RegistrationStatus, Student, Supervisor};
use crate::query::ListQuery;
use crate::request::Transport;

/// Page size for the counting list calls.
pub const STATS_LIMIT: u32 = 1000;

/// Headline numbers shown on the admin dashboards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub students: usize,
    pub supervisors: usize,
    pub registrations: usize,
    pub pending_registrations: usize,
    pub extension_requests: usize,
}

impl DashboardStats {
    /// Summarise already fetched lists.
    #[must_use]
    pub fn from_lists(students: &[Student], supervisors: &[Supervisor], registrations: &[Registration]) -> Self {
        let count_status =
            |status: RegistrationStatus| registrations.iter().filter(|r| r.registration_status == status).count();
        Self {
            students: students.len(),
            supervisors: supervisors.len(),
            registrations: registrations.len(),
            pending_registrations: count_status(RegistrationStatus::Pending),
            extension_requests: count_status(RegistrationStatus::ExtensionRequested),
        }
    }
}

impl<T: Transport> Api<T> {
    /// Fetch students, supervisors and registrations in parallel and count them.
    ///
    /// # Errors
    ///
    /// Returns the first [`ApiError`] raised by any of the three calls.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let query = ListQuery::new().with_page(0, STATS_LIMIT);
        let students = self.students();
        let supervisors = self.supervisors();
        let registrations = self.registrations();
        let (students, supervisors, registrations) =
            try_join3(students.list(&query), supervisors.list(&query), registrations.list(&query)).await?;
        Ok(DashboardStats::from_lists(&students, &supervisors, &registrations))
    }
}
