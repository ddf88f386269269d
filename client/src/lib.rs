//! # client
//!
//! Leptos + WASM front end for the postgraduate research admin portal.
//!
//! This crate contains pages, components, per-resource table views, client
//! state and the browser transport. All backend shapes and request building
//! come from the `records` crate.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod resources;
pub mod state;
pub mod util;

/// WASM entry point: install logging and the panic hook, then hydrate the
/// server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
