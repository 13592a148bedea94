//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `SessionStore`, wraps it in an `RwSignal`, and provides
//! it as context. Pages and route guards read it; only the login flow and the
//! logout button mutate it.
//!
//! LIFECYCLE
//! =========
//! `new` (loading) -> `initialize` -> `set_user` / `logout` -> `teardown`.
//! Nothing is persisted, so initialization never restores a profile in the
//! shipped app; the loading phase exists so guards do not redirect before
//! initialization has had a chance to run.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use profiles::UserProfile;

/// Authentication state of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Initialization has not finished yet.
    #[default]
    Loading,
    Authenticated(UserProfile),
    Unauthenticated,
}

/// Holds at most one authenticated profile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStore {
    state: SessionState,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// End the loading phase, installing `restored` if one was recovered.
    ///
    /// No-op once the store has left `Loading`, so a login that completed
    /// first is never overwritten.
    pub fn initialize(&mut self, restored: Option<UserProfile>) {
        if !self.is_loading() {
            return;
        }
        self.state = match restored {
            Some(profile) => SessionState::Authenticated(profile),
            None => SessionState::Unauthenticated,
        };
    }

    /// Install `profile` as the current user, replacing any previous one.
    pub fn set_user(&mut self, profile: UserProfile) {
        self.state = SessionState::Authenticated(profile);
    }

    /// Drop the current user. Idempotent.
    pub fn logout(&mut self) {
        self.state = SessionState::Unauthenticated;
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&UserProfile> {
        match &self.state {
            SessionState::Authenticated(profile) => Some(profile),
            SessionState::Loading | SessionState::Unauthenticated => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Consume the store, handing back the profile it held.
    #[must_use]
    pub fn teardown(self) -> Option<UserProfile> {
        match self.state {
            SessionState::Authenticated(profile) => Some(profile),
            SessionState::Loading | SessionState::Unauthenticated => None,
        }
    }
}
