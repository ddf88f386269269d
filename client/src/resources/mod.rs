//! Table presentation for each backend resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! A [`ResourceView`] adds what a dashboard table needs on top of
//! [`records::Resource`]: column renderers, the create/edit form, status
//! filter choices, and which row actions a given record currently offers.
//! The generic panel in `components::resource_panel` renders any of them.

pub mod assignments;
pub mod registrations;
pub mod students;
pub mod submissions;
pub mod supervisors;
pub mod users;
pub mod viva_teams;
pub mod vivas;

use records::Resource;

use crate::state::action::RowAction;
use crate::state::form::FieldSpec;

/// One table column: header text and a cell renderer.
pub struct Column<R> {
    pub header: &'static str,
    pub cell: fn(&R) -> String,
}

impl<R> Column<R> {
    pub const fn new(header: &'static str, cell: fn(&R) -> String) -> Self {
        Self { header, cell }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

/// Presentation metadata for a resource table.
pub trait ResourceView: Resource + Send + Sync {
    /// Plural heading, e.g. `"Viva Teams"`.
    const TITLE: &'static str;

    fn columns() -> Vec<Column<Self>>;

    /// Fields of the create/edit form.
    fn form_fields() -> &'static [FieldSpec];

    /// Hint shown in the empty search box.
    fn search_placeholder() -> String {
        format!("Search {}…", Self::TITLE.to_lowercase())
    }

    /// `(value, label)` choices for the status filter; empty hides it.
    fn status_options() -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }

    /// Actions this record offers in its current state.
    fn row_actions(&self) -> Vec<RowAction> {
        vec![RowAction::Edit, RowAction::Delete]
    }

    /// Input collected before sending `action`; empty means none.
    fn action_fields(_action: RowAction) -> &'static [FieldSpec] {
        &[]
    }
}
