//! Search box and optional status filter for a resource table.

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    #[prop(into)] search: Signal<String>,
    on_search: Callback<String>,
    /// `(value, label)` choices; empty hides the status select.
    status_options: Vec<(&'static str, &'static str)>,
    #[prop(into)] status: Signal<String>,
    on_status: Callback<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let status_select = (!status_options.is_empty()).then(move || {
        let choices = status_options
            .into_iter()
            .map(|(value, label)| view! { <option value=value>{label}</option> })
            .collect_view();
        view! {
            <select
                class="search-bar__status"
                prop:value=move || status.get()
                on:change=move |ev| on_status.run(event_target_value(&ev))
            >
                <option value="">"All statuses"</option>
                {choices}
            </select>
        }
    });

    view! {
        <div class="search-bar">
            <input
                class="search-bar__input"
                type="search"
                placeholder=placeholder
                prop:value=move || search.get()
                on:input=move |ev| on_search.run(event_target_value(&ev))
            />
            {status_select}
        </div>
    }
}
