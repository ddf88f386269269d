//! Academic administrator dashboard: students, supervision and registrations.

use leptos::prelude::*;
use records::{Assignment, Registration, Role, Student, Supervisor};

use crate::components::dashboard_header::{DashboardHeader, Tabs};
use crate::components::resource_panel::resource_panel;
use crate::components::role_gate::RoleGate;
use crate::components::stats_cards::StatsCards;
use crate::state::panel::PanelOptions;

const ALLOWED: &[Role] = &[Role::AcademicAdmin];

#[component]
pub fn AcademicAdminPage() -> impl IntoView {
    let active = RwSignal::new(0_usize);
    let panel = move || match active.get() {
        0 => resource_panel::<Student>(PanelOptions::manage()).into_any(),
        1 => resource_panel::<Supervisor>(PanelOptions::manage()).into_any(),
        2 => resource_panel::<Assignment>(PanelOptions::manage()).into_any(),
        _ => resource_panel::<Registration>(PanelOptions::manage()).into_any(),
    };

    view! {
        <RoleGate allowed=ALLOWED>
            <div class="dashboard-page">
                <DashboardHeader title="Academic Administration"/>
                <StatsCards/>
                <Tabs labels=vec!["Students", "Supervisors", "Assignments", "Registrations"] active=active/>
                {panel}
            </div>
        </RoleGate>
    }
}
