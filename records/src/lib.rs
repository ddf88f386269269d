//! Shared record model and REST client core for the PGR portal.
//!
//! This crate owns the wire representation used by both the browser `client`
//! and the `cli`. It knows every backend resource shape, how list queries are
//! encoded, how each endpoint path is built, and how backend error bodies are
//! reduced to one display string. The actual HTTP stack is supplied by the
//! caller through [`Transport`].

pub mod api;
pub mod detail;
pub mod model;
pub mod query;
pub mod request;
pub mod resource;
pub mod search;
pub mod stats;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use api::{Api, Endpoint};
pub use detail::{ApiError, extract_error_message};
pub use model::*;
pub use query::ListQuery;
pub use request::{ApiRequest, Method, Transport, parse_body};
pub use resource::Resource;
pub use search::{filter_records, matches_search};
pub use stats::DashboardStats;
