//! Headline counters for the admin dashboards.

use leptos::prelude::*;
use records::DashboardStats;

/// Counts load once on mount. A failed load replaces the cards with an
/// inline error; the rest of the dashboard is unaffected.
#[component]
pub fn StatsCards() -> impl IntoView {
    let stats = RwSignal::new(None::<DashboardStats>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::client().dashboard_stats().await {
                Ok(loaded) => stats.set(Some(loaded)),
                Err(err) => {
                    log::warn!("dashboard stats failed: {err}");
                    error.set(Some(err.display_message("Failed to load dashboard statistics")));
                }
            }
        });
    });

    let card = move |label: &'static str, pick: fn(&DashboardStats) -> usize| {
        view! {
            <div class="stats-card">
                <span class="stats-card__value">
                    {move || stats.get().map_or_else(|| "…".to_owned(), |s| pick(&s).to_string())}
                </span>
                <span class="stats-card__label">{label}</span>
            </div>
        }
    };

    view! {
        <Show
            when=move || error.get().is_none()
            fallback=move || view! { <div class="banner banner--error">{move || error.get().unwrap_or_default()}</div> }
        >
            <div class="stats-cards">
                {card("Students", |s| s.students)}
                {card("Supervisors", |s| s.supervisors)}
                {card("Registrations", |s| s.registrations)}
                {card("Pending Registrations", |s| s.pending_registrations)}
                {card("Extension Requests", |s| s.extension_requests)}
            </div>
        </Show>
    }
}
