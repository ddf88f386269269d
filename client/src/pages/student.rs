//! Student dashboard: read-only view of the student's own records.

use leptos::prelude::*;
use records::{Registration, Role, Submission};

use crate::components::dashboard_header::{DashboardHeader, Tabs};
use crate::components::resource_panel::resource_panel;
use crate::components::role_gate::RoleGate;
use crate::state::auth::AuthState;
use crate::state::panel::PanelOptions;

const ALLOWED: &[Role] = &[Role::Student];

/// Read-only panel scoped to the student's own number when known.
pub fn own_records(auth: &AuthState, title: &'static str) -> PanelOptions {
    let options = PanelOptions::read_only().titled(title);
    match auth.user.as_ref().and_then(|user| user.student_number.clone()) {
        Some(number) => options.with_filter("student_number", number),
        None => options,
    }
}

#[component]
pub fn StudentPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let active = RwSignal::new(0_usize);
    let panel = move || match active.get() {
        0 => resource_panel::<Registration>(own_records(&auth.get_untracked(), "My Registrations")).into_any(),
        _ => resource_panel::<Submission>(own_records(&auth.get_untracked(), "My Submissions")).into_any(),
    };

    view! {
        <RoleGate allowed=ALLOWED>
            <div class="dashboard-page">
                <DashboardHeader title="Student"/>
                <Tabs labels=vec!["Registrations", "Submissions"] active=active/>
                {panel}
            </div>
        </RoleGate>
    }
}
