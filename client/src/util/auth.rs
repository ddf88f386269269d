//! Session bootstrap and page guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app loads the signed-in user once at startup; every route component
//! installs the same guard so redirects behave identically everywhere.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use records::Role;

use crate::state::auth::AuthState;
use crate::util::routing::guard_redirect;

/// Redirect away whenever the loaded session may not see a page restricted
/// to `allowed` roles.
pub fn install_role_guard<F>(auth: RwSignal<AuthState>, allowed: &'static [Role], navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = guard_redirect(&auth.get(), allowed) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Resolve the current user from the stored token into `auth`.
///
/// Without a token the session is simply empty. A rejected token is
/// cleared so the login page starts fresh.
pub fn load_current_user(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::session_store;

        if session_store::load_token().is_none() {
            auth.set(AuthState::default());
            return;
        }
        auth.set(AuthState::loading());
        leptos::task::spawn_local(async move {
            match crate::net::api::client().current_user().await {
                Ok(user) => auth.set(AuthState { user: Some(user), loading: false }),
                Err(err) => {
                    log::warn!("session lookup failed: {err}");
                    if err.status() == Some(401) {
                        session_store::clear_token();
                    }
                    auth.set(AuthState::default());
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// End the session server-side, drop the token and return to the login page.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Err(err) = crate::net::api::client().logout().await {
            log::warn!("logout failed: {err}");
        }
        crate::util::session_store::clear_token();
        auth.set(AuthState::default());
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(crate::util::routing::LOGIN_PATH);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
