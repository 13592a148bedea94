//! Route guards shared by the login and dashboard pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard sends unauthenticated visitors to `/auth`, but only once the
//! session store has finished initializing. The login page sends visitors
//! who already hold a profile to `/dashboard`. Each guard fires at most once
//! per mounted page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionStore;

pub const LOGIN_PATH: &str = "/auth";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Protected views redirect when initialization is done and no user is held.
#[must_use]
pub fn should_redirect_unauth(session: &SessionStore) -> bool {
    !session.is_loading() && session.current_user().is_none()
}

/// The login view redirects when a user is already held.
#[must_use]
pub fn should_redirect_authed(session: &SessionStore) -> bool {
    session.current_user().is_some()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GuardKind {
    Protected,
    LoginOnly,
}

/// One-shot redirect latch for a mounted view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedirectGuard {
    kind: GuardKind,
    fired: bool,
}

impl RedirectGuard {
    /// Guard for views that need a user; redirects to [`LOGIN_PATH`].
    #[must_use]
    pub fn protected() -> Self {
        Self { kind: GuardKind::Protected, fired: false }
    }

    /// Guard for the login view; redirects to [`DASHBOARD_PATH`].
    #[must_use]
    pub fn login_only() -> Self {
        Self { kind: GuardKind::LoginOnly, fired: false }
    }

    /// Redirect target the first time the guard condition holds, else `None`.
    pub fn check(&mut self, session: &SessionStore) -> Option<&'static str> {
        if self.fired {
            return None;
        }
        let target = match self.kind {
            GuardKind::Protected => should_redirect_unauth(session).then_some(LOGIN_PATH),
            GuardKind::LoginOnly => should_redirect_authed(session).then_some(DASHBOARD_PATH),
        };
        self.fired = target.is_some();
        target
    }
}

/// One run of an installed redirect: consult `guard`, navigate if it fires.
fn redirect_pass<F>(guard: &mut RedirectGuard, session: RwSignal<SessionStore>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    if let Some(path) = session.with(|s| guard.check(s)) {
        navigate(path, NavigateOptions::default());
    }
}

fn install_redirect<F>(session: RwSignal<SessionStore>, mut guard: RedirectGuard, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || redirect_pass(&mut guard, session, &navigate));
}

/// Redirect to [`LOGIN_PATH`] once the session has loaded without a user.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionStore>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(session, RedirectGuard::protected(), navigate);
}

/// Redirect to [`DASHBOARD_PATH`] whenever a user is already signed in.
pub fn install_authed_redirect<F>(session: RwSignal<SessionStore>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    install_redirect(session, RedirectGuard::login_only(), navigate);
}
