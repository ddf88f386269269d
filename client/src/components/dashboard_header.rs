//! Dashboard title bar with the signed-in user and sign-out.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::auth::sign_out;

#[component]
pub fn DashboardHeader(title: &'static str) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let role = move || auth.get().role().map(|role| role.label()).unwrap_or_default();

    view! {
        <header class="dashboard-header toolbar">
            <span class="toolbar__title">{title}</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <span class="toolbar__user">{move || auth.get().display_name()}</span>
            <span class="toolbar__role">{role}</span>
            <button class="btn toolbar__logout" on:click=move |_| sign_out(auth)>"Sign out"</button>
        </header>
    }
}

/// Tab strip switching between a dashboard's panels.
#[component]
pub fn Tabs(labels: Vec<&'static str>, active: RwSignal<usize>) -> impl IntoView {
    let tabs = labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| {
            view! {
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || active.get() == index
                    on:click=move |_| active.set(index)
                >
                    {label}
                </button>
            }
        })
        .collect_view();
    view! { <nav class="tabs">{tabs}</nav> }
}
