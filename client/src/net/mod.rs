//! Networking for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` adapts `gloo-net` to the shared `records::Transport` so every page
//! talks to the backend through the same namespaced `records::Api`.

pub mod api;
