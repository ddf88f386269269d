//! Generic resource table: search, status filter, paging, row actions and
//! the create/edit/confirm modals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard panel is `resource_panel::<R>(options)`. The panel owns an
//! `RwSignal<TableState<R>>` and drives it with `state::table::{refresh,
//! perform}`; what a click does is decided by `state::panel::intent_for`.
//!
//! ERROR HANDLING
//! ==============
//! Load and mutation failures land in the panel's banner. Form submission
//! failures are shown inside the still-open form instead.

use leptos::prelude::*;
use records::ApiRequest;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::form_dialog::FormDialog;
use crate::components::message_banner::MessageBanner;
use crate::components::search_bar::SearchBar;
use crate::resources::ResourceView;
use crate::state::action::{PendingAction, RowAction};
use crate::state::form::FormState;
use crate::state::panel::{FormTarget, Intent, PanelOptions, intent_for};
use crate::state::table::TableState;

/// Render a complete table panel for resource `R`.
pub fn resource_panel<R: ResourceView>(options: PanelOptions) -> impl IntoView {
    let table = RwSignal::new(TableState::<R>::with_fixed_filters(options.fixed_filters.clone()));
    let form_target = RwSignal::new(None::<FormTarget>);
    let form = RwSignal::new(FormState::default());
    let pending = RwSignal::new(None::<PendingAction>);

    Effect::new(move || reload(table));

    let on_search = Callback::new(move |text: String| {
        table.update(|s| {
            s.search = text;
            s.reset_page();
        });
        reload(table);
    });
    let on_status = Callback::new(move |status: String| {
        table.update(|s| {
            s.status = status;
            s.reset_page();
        });
        reload(table);
    });
    let on_dismiss = Callback::new(move |()| table.update(TableState::dismiss_messages));

    let on_action = Callback::new(move |(record, action): (R, RowAction)| match intent_for(&record, action) {
        Intent::OpenForm(target, state) => {
            form.set(state);
            form_target.set(Some(target));
        }
        Intent::Confirm(next) => pending.set(Some(next)),
        Intent::Run { request, success } => run(table, request, success, |_| {}),
    });

    let on_create = move |_| {
        let target = FormTarget::create::<R>();
        form.set(FormState::blank(target.fields));
        form_target.set(Some(target));
    };

    let on_form_submit = Callback::new(move |()| {
        let Some(target) = form_target.get_untracked() else {
            return;
        };
        let body = match form.with_untracked(|f| f.to_payload(target.fields)) {
            Ok(body) => body,
            Err(message) => {
                form.update(|f| f.error = Some(message));
                return;
            }
        };
        let (request, success) = match target.submit_intent::<R>(body) {
            Intent::Confirm(next) => {
                form_target.set(None);
                pending.set(Some(next));
                return;
            }
            Intent::Run { request, success } => (request, success),
            Intent::OpenForm(..) => return,
        };
        form.update(|f| {
            f.submitting = true;
            f.error = None;
        });
        run(table, request, success, move |ok| {
            if ok {
                form_target.set(None);
                return;
            }
            let message = table.try_update(|s| s.error.take()).flatten();
            form.update(|f| {
                f.submitting = false;
                f.error = message;
            });
        });
    });
    let on_form_cancel = Callback::new(move |()| form_target.set(None));

    let on_confirm = Callback::new(move |()| {
        if let Some(action) = pending.get_untracked() {
            pending.set(None);
            run(table, action.request, action.success, |_| {});
        }
    });
    let on_confirm_cancel = Callback::new(move |()| pending.set(None));

    let title = options.title.unwrap_or(R::TITLE);
    let allow_create = options.allow_create;
    let headers = R::columns().into_iter().map(|column| view! { <th>{column.header}</th> }).collect_view();

    let rows = move || {
        let visible = table.with(TableState::visible);
        if visible.is_empty() {
            let message = if table.with(|s| s.loading) { "Loading…" } else { "No records found." };
            let span = R::columns().len() + 1;
            return view! {
                <tr class="data-table__empty">
                    <td colspan=span.to_string()>{message}</td>
                </tr>
            }
            .into_any();
        }
        visible
            .into_iter()
            .map(|record| {
                let actions = options.actions_for(&record);
                row_view(record, actions, on_action)
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="panel">
            <header class="panel__header">
                <h2 class="panel__title">{title}</h2>
                <Show when=move || allow_create>
                    <button class="btn btn--primary" on:click=on_create>
                        {format!("New {}", crate::state::action::capitalize(R::NOUN))}
                    </button>
                </Show>
            </header>
            <MessageBanner
                error=Signal::derive(move || table.with(|s| s.error.clone()))
                notice=Signal::derive(move || table.with(|s| s.notice.clone()))
                on_dismiss=on_dismiss
            />
            <SearchBar
                search=Signal::derive(move || table.with(|s| s.search.clone()))
                on_search=on_search
                status_options=R::status_options()
                status=Signal::derive(move || table.with(|s| s.status.clone()))
                on_status=on_status
                placeholder=R::search_placeholder()
            />
            <table class="data-table">
                <thead>
                    <tr>
                        {headers}
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <footer class="panel__pager">
                <button
                    class="btn btn--small"
                    disabled=move || table.with(|s| s.skip == 0)
                    on:click=move |_| {
                        table.update(TableState::prev_page);
                        reload(table);
                    }
                >
                    "Previous"
                </button>
                <span class="panel__page">{move || format!("Page {}", table.with(TableState::page_number))}</span>
                <button
                    class="btn btn--small"
                    disabled=move || !table.with(TableState::has_next_page)
                    on:click=move |_| {
                        table.update(TableState::next_page);
                        reload(table);
                    }
                >
                    "Next"
                </button>
            </footer>
            {move || {
                form_target
                    .get()
                    .map(|target| {
                        view! { <FormDialog target=target form=form on_submit=on_form_submit on_cancel=on_form_cancel /> }
                    })
            }}
            {move || {
                pending
                    .get()
                    .map(|action| {
                        view! { <ConfirmDialog pending=action on_confirm=on_confirm on_cancel=on_confirm_cancel /> }
                    })
            }}
        </section>
    }
}

fn row_view<R: ResourceView>(record: R, actions: Vec<RowAction>, on_action: Callback<(R, RowAction)>) -> impl IntoView {
    let cells = R::columns()
        .into_iter()
        .map(|column| {
            let text = (column.cell)(&record);
            view! { <td>{text}</td> }
        })
        .collect_view();
    let buttons = actions
        .into_iter()
        .map(|action| {
            let record = record.clone();
            let class = if action.is_danger() { "btn btn--small btn--danger" } else { "btn btn--small" };
            view! {
                <button class=class on:click=move |_| on_action.run((record.clone(), action))>
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <tr>
            {cells}
            <td class="data-table__actions">{buttons}</td>
        </tr>
    }
}

/// Fetch the current page in the background.
fn reload<R: ResourceView>(table: RwSignal<TableState<R>>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::table::refresh(&crate::net::api::client(), &table).await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = table;
}

/// Send a mutation in the background, then report whether it succeeded.
fn run<R: ResourceView>(
    table: RwSignal<TableState<R>>,
    request: ApiRequest,
    success: String,
    done: impl FnOnce(bool) + 'static,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let ok = crate::state::table::perform(&crate::net::api::client(), &table, request, &success).await;
        done(ok);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (table, request, success, done);
}
