//! Confirmation modal for irreversible row actions.

use leptos::prelude::*;

use crate::state::action::PendingAction;

#[component]
pub fn ConfirmDialog(pending: PendingAction, on_confirm: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let confirm_class = if pending.danger { "btn btn--danger" } else { "btn btn--primary" };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--confirm"
                role="alertdialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>{pending.title}</h2>
                <p>{pending.prompt}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class=confirm_class on:click=move |_| on_confirm.run(())>"Confirm"</button>
                </div>
            </div>
        </div>
    }
}
