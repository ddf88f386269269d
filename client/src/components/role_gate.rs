//! Route guard wrapping every dashboard page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use records::Role;

use crate::state::auth::AuthState;
use crate::util::auth::install_role_guard;
use crate::util::routing::may_render;

/// Render `children` only for a signed-in user whose role is in `allowed`;
/// anyone else is redirected (to `/login` or their own dashboard) and never
/// sees the page's panels.
#[component]
pub fn RoleGate(allowed: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_role_guard(auth, allowed, use_navigate());

    view! {
        <Show
            when=move || may_render(&auth.get(), allowed)
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting..." }}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
