//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and resource tables. Pages compose them;
//! shared session state comes from Leptos context providers.

pub mod confirm_dialog;
pub mod dashboard_header;
pub mod form_dialog;
pub mod message_banner;
pub mod resource_panel;
pub mod role_gate;
pub mod search_bar;
pub mod stats_cards;
