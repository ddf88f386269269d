//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::academic_admin::AcademicAdminPage;
use crate::pages::dashboard::{DashboardPage, UnauthorizedPage};
use crate::pages::gbos_admin::GbosAdminPage;
use crate::pages::login::LoginPage;
use crate::pages::student::StudentPage;
use crate::pages::supervisor::SupervisorPage;
use crate::pages::system_admin::SystemAdminPage;
use crate::state::auth::AuthState;
use crate::util::auth::load_current_user;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, starts the current-user lookup and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Loading until the browser resolves the stored token.
    let auth = RwSignal::new(AuthState::loading());
    provide_context(auth);

    Effect::new(move || load_current_user(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/pgr-portal.css"/>
        <Title text="PGR Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("admin") view=SystemAdminPage/>
                <Route path=StaticSegment("academic") view=AcademicAdminPage/>
                <Route path=StaticSegment("gbos") view=GbosAdminPage/>
                <Route path=StaticSegment("supervisor") view=SupervisorPage/>
                <Route path=StaticSegment("student") view=StudentPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
            </Routes>
        </Router>
    }
}
