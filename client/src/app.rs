//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::net::source::ProfileSource;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::session::SessionStore;
use crate::util::auth::DASHBOARD_PATH;

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
/// Owns the session store for the lifetime of the page and provides it,
/// together with the profile source, to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::new());
    provide_context(session);
    provide_context(ProfileSource::from_build_env());

    // Effects only run in the browser, so SSR output stays in the loading
    // state. Nothing is persisted, so there is no profile to restore.
    Effect::new(move || session.update(|s| s.initialize(None)));

    view! {
        <Stylesheet id="leptos" href="/pkg/phone-login.css"/>
        <Title text="Auth Dashboard App"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("auth") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=DASHBOARD_PATH/> }/>
            </Routes>
        </Router>
    }
}
