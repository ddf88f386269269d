//! Inline error / success banner shown above a table.

use leptos::prelude::*;

#[component]
pub fn MessageBanner(
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] notice: Signal<Option<String>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="banner banner--error" role="alert">
                <span>{move || error.get().unwrap_or_default()}</span>
                <button class="banner__close" on:click=move |_| on_dismiss.run(())>"×"</button>
            </div>
        </Show>
        <Show when=move || notice.get().is_some()>
            <div class="banner banner--notice" role="status">
                <span>{move || notice.get().unwrap_or_default()}</span>
                <button class="banner__close" on:click=move |_| on_dismiss.run(())>"×"</button>
            </div>
        </Show>
    }
}
