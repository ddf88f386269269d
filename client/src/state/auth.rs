//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the role router to coordinate login redirects
//! and role-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use records::{Role, User};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State while `/api/auth/me` is in flight.
    pub fn loading() -> Self {
        Self { user: None, loading: true }
    }

    /// Role of the signed-in user, if any.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    /// Display name for headers.
    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "—".to_owned(), |user| user.username.clone())
    }
}
