//! Landing route: sends each user to their role's dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/` renders nothing of its own. Once the session lookup settles it
//! redirects to `/login` or the dashboard for the user's role; unknown roles
//! land on `/unauthorized`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::sign_out;
use crate::util::routing::{RouteDecision, landing_route};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let RouteDecision::Redirect(path) = landing_route(&auth.get()) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class="dashboard-page">
            <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting..." }}</p>
        </div>
    }
}

/// Shown to accounts whose role has no dashboard.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="dashboard-page">
            <div class="login-card">
                <h1>"Access denied"</h1>
                <p>"Your account does not have access to any dashboard. Contact a system administrator."</p>
                <button class="btn" on:click=move |_| sign_out(auth)>"Sign out"</button>
            </div>
        </div>
    }
}
