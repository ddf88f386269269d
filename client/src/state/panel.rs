//! Per-panel configuration and the dispatch from a row action to what the UI
//! does next (open a form, ask for confirmation, or send straight away).

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use records::ApiRequest;
use records::resource::{action_request, create_request, delete_request, update_request};
use serde_json::Value;

use crate::resources::ResourceView;
use crate::state::action::{PendingAction, RowAction, capitalize};
use crate::state::form::{FieldSpec, FormState};

/// What one dashboard lets its user do with a resource table.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelOptions {
    /// Heading override; defaults to the resource title.
    pub title: Option<&'static str>,
    pub allow_create: bool,
    /// Permitted row actions; `None` permits every action a record offers.
    pub actions: Option<Vec<RowAction>>,
    /// Filters always sent with the list query.
    pub fixed_filters: Vec<(String, String)>,
}

impl PanelOptions {
    /// Full create/edit/delete plus every domain action.
    pub fn manage() -> Self {
        Self { title: None, allow_create: true, actions: None, fixed_filters: Vec::new() }
    }

    pub fn read_only() -> Self {
        Self { title: None, allow_create: false, actions: Some(Vec::new()), fixed_filters: Vec::new() }
    }

    #[must_use]
    pub fn titled(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_create(mut self, allow: bool) -> Self {
        self.allow_create = allow;
        self
    }

    #[must_use]
    pub fn with_actions(mut self, actions: &[RowAction]) -> Self {
        self.actions = Some(actions.to_vec());
        self
    }

    #[must_use]
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fixed_filters.push((key.into(), value.into()));
        self
    }

    pub fn permits(&self, action: RowAction) -> bool {
        self.actions.as_ref().is_none_or(|allowed| allowed.contains(&action))
    }

    /// Actions to render for `record`: what it offers, narrowed by the panel.
    pub fn actions_for<R: ResourceView>(&self, record: &R) -> Vec<RowAction> {
        record.row_actions().into_iter().filter(|action| self.permits(*action)).collect()
    }
}

/// What submitting an open form does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(String),
    Action(String, RowAction),
}

/// An open modal form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormTarget {
    pub title: String,
    pub mode: FormMode,
    pub fields: &'static [FieldSpec],
    /// Warning shown above the submit button for irreversible actions.
    pub note: Option<String>,
}

impl FormTarget {
    pub fn create<R: ResourceView>() -> Self {
        Self {
            title: format!("New {}", capitalize(R::NOUN)),
            mode: FormMode::Create,
            fields: R::form_fields(),
            note: None,
        }
    }

    /// Request sent when the form is submitted with `body`.
    pub fn request<R: ResourceView>(&self, body: Value) -> ApiRequest {
        match &self.mode {
            FormMode::Create => create_request::<R>(body),
            FormMode::Update(key) => update_request::<R>(key, body),
            FormMode::Action(key, action) => request_for::<R>(key, *action, Some(body)),
        }
    }

    /// What submitting the form with a validated `body` does. Irreversible
    /// actions still go through the confirmation step once their input is in.
    pub fn submit_intent<R: ResourceView>(&self, body: Value) -> Intent {
        let request = self.request::<R>(body);
        match &self.mode {
            FormMode::Action(_, action) if action.needs_confirmation() => {
                Intent::Confirm(PendingAction::new(*action, R::NOUN, request))
            }
            _ => Intent::Run { request, success: self.success_message::<R>() },
        }
    }

    /// Text of the submit button.
    pub fn submit_label(&self) -> &'static str {
        match &self.mode {
            FormMode::Action(_, action) if action.needs_confirmation() => "Continue",
            FormMode::Action(_, action) => action.label(),
            FormMode::Create | FormMode::Update(_) => "Save",
        }
    }

    pub fn success_message<R: ResourceView>(&self) -> String {
        match &self.mode {
            FormMode::Create => format!("{} created", capitalize(R::NOUN)),
            FormMode::Update(_) => RowAction::Edit.success_message(R::NOUN),
            FormMode::Action(_, action) => action.success_message(R::NOUN),
        }
    }
}

/// Next UI step after a row action is clicked.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    OpenForm(FormTarget, FormState),
    Confirm(PendingAction),
    Run { request: ApiRequest, success: String },
}

/// Request for `action` on the record keyed `key`.
pub fn request_for<R: ResourceView>(key: &str, action: RowAction, body: Option<Value>) -> ApiRequest {
    match action {
        RowAction::Delete => delete_request::<R>(key),
        RowAction::Edit => update_request::<R>(key, body.unwrap_or(Value::Null)),
        other => action_request::<R>(key, other.endpoint().unwrap_or_default(), body),
    }
}

/// Decide how `action` on `record` proceeds.
pub fn intent_for<R: ResourceView>(record: &R, action: RowAction) -> Intent {
    let key = record.key();

    if action == RowAction::Edit {
        let target = FormTarget {
            title: format!("Edit {}", capitalize(R::NOUN)),
            mode: FormMode::Update(key),
            fields: R::form_fields(),
            note: None,
        };
        let current = serde_json::to_value(record).unwrap_or_default();
        let form = FormState::from_record(target.fields, &current);
        return Intent::OpenForm(target, form);
    }

    let fields = R::action_fields(action);
    if !fields.is_empty() {
        let target = FormTarget {
            title: format!("{} {}", action.label(), capitalize(R::NOUN)),
            mode: FormMode::Action(key, action),
            fields,
            note: action.confirm_prompt(R::NOUN),
        };
        let form = FormState::blank(fields);
        return Intent::OpenForm(target, form);
    }

    let request = request_for::<R>(&key, action, None);
    if action.needs_confirmation() {
        Intent::Confirm(PendingAction::new(action, R::NOUN, request))
    } else {
        Intent::Run { request, success: action.success_message(R::NOUN) }
    }
}
