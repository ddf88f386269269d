//! Role-based dashboard routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/` sends each signed-in user to their role's dashboard. Dashboard pages
//! apply the same table in reverse: a user whose role is not allowed on the
//! page is sent back to their own dashboard before any panel renders.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use records::Role;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Dashboard route for `role`.
pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::SystemAdmin => "/admin",
        Role::AcademicAdmin => "/academic",
        Role::GbosApprover => "/gbos",
        Role::Supervisor => "/supervisor",
        Role::Student => "/student",
        Role::Unknown => UNAUTHORIZED_PATH,
    }
}

/// Outcome of routing the landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session lookup still in flight.
    Wait,
    Redirect(&'static str),
}

/// Where `/` should send the current session.
pub fn landing_route(auth: &AuthState) -> RouteDecision {
    if auth.loading {
        return RouteDecision::Wait;
    }
    match auth.role() {
        Some(role) => RouteDecision::Redirect(dashboard_path(role)),
        None => RouteDecision::Redirect(LOGIN_PATH),
    }
}

/// Redirect for a page restricted to `allowed` roles, if the session may not
/// see it.
pub fn guard_redirect(auth: &AuthState, allowed: &[Role]) -> Option<&'static str> {
    if auth.loading {
        return None;
    }
    match auth.role() {
        None => Some(LOGIN_PATH),
        Some(role) if allowed.contains(&role) => None,
        Some(role) => Some(dashboard_path(role)),
    }
}

/// Whether the page may render its panels.
pub fn may_render(auth: &AuthState, allowed: &[Role]) -> bool {
    !auth.loading && auth.role().is_some_and(|role| allowed.contains(&role))
}
