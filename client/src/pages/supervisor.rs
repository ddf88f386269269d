//! Supervisor dashboard: own students, viva panel proposals, submission review.

use leptos::prelude::*;
use records::{Assignment, Role, Submission, VivaTeam};

use crate::components::dashboard_header::{DashboardHeader, Tabs};
use crate::components::resource_panel::resource_panel;
use crate::components::role_gate::RoleGate;
use crate::state::action::RowAction;
use crate::state::auth::AuthState;
use crate::state::panel::PanelOptions;

const ALLOWED: &[Role] = &[Role::Supervisor];

/// Assignments scoped to the signed-in supervisor when the account is linked
/// to a supervisor record.
pub fn assignment_options(auth: &AuthState) -> PanelOptions {
    let options = PanelOptions::read_only().titled("My Students");
    match auth.user.as_ref().and_then(|user| user.supervisor_id) {
        Some(id) => options.with_filter("supervisor_id", id.to_string()),
        None => options,
    }
}

#[component]
pub fn SupervisorPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let active = RwSignal::new(0_usize);
    let panel = move || match active.get() {
        0 => resource_panel::<Assignment>(assignment_options(&auth.get_untracked())).into_any(),
        1 => resource_panel::<VivaTeam>(PanelOptions::manage().titled("Viva Team Proposals").with_actions(&[RowAction::Edit]))
            .into_any(),
        _ => resource_panel::<Submission>(PanelOptions::manage().with_create(false).with_actions(&[
            RowAction::Approve,
            RowAction::Reject,
            RowAction::RequestRevision,
        ]))
        .into_any(),
    };

    view! {
        <RoleGate allowed=ALLOWED>
            <div class="dashboard-page">
                <DashboardHeader title="Supervisor"/>
                <Tabs labels=vec!["My Students", "Viva Teams", "Submissions"] active=active/>
                {panel}
            </div>
        </RoleGate>
    }
}
