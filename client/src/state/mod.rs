//! Client state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data plus pure transitions. Components hold these in `RwSignal`s;
//! the async flows in [`table`] also run against a `RefCell` in tests.

pub mod action;
pub mod auth;
pub mod form;
pub mod panel;
pub mod table;
