//! GBOS dashboard: extension approval, viva panels, vivas and submission review.

use leptos::prelude::*;
use records::{Registration, Role, Submission, Viva, VivaTeam};

use crate::components::dashboard_header::{DashboardHeader, Tabs};
use crate::components::resource_panel::resource_panel;
use crate::components::role_gate::RoleGate;
use crate::state::action::RowAction;
use crate::state::panel::PanelOptions;

const ALLOWED: &[Role] = &[Role::GbosApprover];

#[component]
pub fn GbosAdminPage() -> impl IntoView {
    let active = RwSignal::new(0_usize);
    let panel = move || match active.get() {
        0 => resource_panel::<Registration>(
            PanelOptions::manage()
                .titled("Extension Requests")
                .with_create(false)
                .with_actions(&[RowAction::ApproveExtension]),
        )
        .into_any(),
        1 => resource_panel::<VivaTeam>(PanelOptions::manage().with_create(false).with_actions(&[
            RowAction::Approve,
            RowAction::Reject,
            RowAction::Schedule,
            RowAction::RecordOutcome,
        ]))
        .into_any(),
        2 => resource_panel::<Viva>(PanelOptions::manage()).into_any(),
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
                <DashboardHeader title="GBOS Administration"/>
                <Tabs labels=vec!["Registrations", "Viva Teams", "Vivas", "Submissions"] active=active/>
                {panel}
            </div>
        </RoleGate>
    }
}
