//! System administrator dashboard: headline stats, accounts and core records.

use leptos::prelude::*;
use records::{Role, Student, Supervisor, User};

use crate::components::dashboard_header::{DashboardHeader, Tabs};
use crate::components::resource_panel::resource_panel;
use crate::components::role_gate::RoleGate;
use crate::components::stats_cards::StatsCards;
use crate::state::panel::PanelOptions;

const ALLOWED: &[Role] = &[Role::SystemAdmin];

#[component]
pub fn SystemAdminPage() -> impl IntoView {
    let active = RwSignal::new(0_usize);
    let panel = move || match active.get() {
        0 => resource_panel::<User>(PanelOptions::manage()).into_any(),
        1 => resource_panel::<Student>(PanelOptions::manage()).into_any(),
        _ => resource_panel::<Supervisor>(PanelOptions::manage()).into_any(),
    };

    view! {
        <RoleGate allowed=ALLOWED>
            <div class="dashboard-page">
                <DashboardHeader title="System Administration"/>
                <StatsCards/>
                <Tabs labels=vec!["Users", "Students", "Supervisors"] active=active/>
                {panel}
            </div>
        </RoleGate>
    }
}
