//! Modal create / edit / action form rendered from field specs.

use leptos::prelude::*;

use crate::state::form::{FieldKind, FieldSpec, FormState};
use crate::state::panel::FormTarget;

#[component]
pub fn FormDialog(
    target: FormTarget,
    form: RwSignal<FormState>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let fields = target.fields.iter().map(|field| field_view(*field, form)).collect_view();
    let submit_label = target.submit_label();
    let note = target.note.map(|note| view! { <p class="dialog__note">{note}</p> });

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.with_untracked(|f| f.submitting) {
            on_submit.run(());
        }
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog dialog--form"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2>{target.title}</h2>
                <form class="form" on:submit=on_form_submit>
                    {fields}
                    {note}
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <p class="form__error" role="alert">
                            {move || form.with(|f| f.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || form.with(|f| f.submitting)>
                            {move || if form.with(|f| f.submitting) { "Saving…" } else { submit_label }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn field_view(field: FieldSpec, form: RwSignal<FormState>) -> impl IntoView {
    let name = field.name;
    let value = move || form.with(|f| f.get(name));
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set(name, event_target_value(&ev)));

    let input = match field.kind {
        FieldKind::TextArea => view! {
            <textarea class="form__input form__input--area" name=name prop:value=value on:input=on_input></textarea>
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <input
                class="form__checkbox"
                type="checkbox"
                name=name
                prop:checked=move || form.with(|f| f.checked(name))
                on:change=move |ev| form.update(|f| f.set(name, event_target_checked(&ev).to_string()))
            />
        }
        .into_any(),
        FieldKind::Select(options) => {
            let blank = (!field.required).then(|| view! { <option value="">"—"</option> });
            let choices = options
                .iter()
                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                .collect_view();
            view! {
                <select class="form__input" name=name prop:value=value on:change=on_input>
                    {blank}
                    {choices}
                </select>
            }
            .into_any()
        }
        _ => view! {
            <input
                class="form__input"
                type=field.input_type()
                name=name
                required=field.required
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <label class="form__field">
            <span class="form__label">
                {field.label}
                {field.required.then_some(" *")}
            </span>
            {input}
        </label>
    }
}
