//! Login form state and the phone-to-session flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page keeps a `LoginForm` in a signal. A submission runs in three
//! steps so the page can hop between signals and the async provider call:
//! `begin_submit` (validate + gate), `exchange` (provider call), and
//! `complete` (commit to the session store or surface the failure).
//! [`submit`] composes the same three steps for callers that own plain values.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures show the rule's own message on the phone field and
//! never reach the provider. Provider failures are logged and replaced with
//! one generic field message; the session store is left untouched.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use profiles::UserProfile;
use profiles::phone::{Field, PhoneNumber, validate_login};

use super::session::SessionStore;
use crate::net::provider::{LoginError, ProfileProvider};

/// Field message shown when a valid number could not be exchanged for a profile.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    /// A provider call is outstanding; further submits are ignored.
    Submitting,
    /// The profile was handed to the session store.
    Succeeded,
}

/// Login form input plus the error currently shown against the phone field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub phone: String,
    pub error: Option<String>,
    pub phase: LoginPhase,
}

impl LoginForm {
    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    /// Validate the phone field and, if it passes, enter `Submitting`.
    ///
    /// Returns `None` when a submission is already outstanding or when
    /// validation fails (the field error is recorded in that case).
    pub fn begin_submit(&mut self) -> Option<PhoneNumber> {
        if self.is_submitting() {
            return None;
        }
        match validate_login(&self.phone) {
            Ok(phone) => {
                self.error = None;
                self.phase = LoginPhase::Submitting;
                Some(phone)
            }
            Err(errors) => {
                self.error = errors.message_for(Field::Phone).map(str::to_owned);
                self.phase = LoginPhase::Idle;
                None
            }
        }
    }

    /// Apply the outcome of [`exchange`].
    ///
    /// On success the profile is installed in `session` (the only mutation
    /// the flow makes) and `true` is returned. On failure `session` is not
    /// touched and the generic failure message is shown.
    pub fn complete(&mut self, result: Result<UserProfile, LoginError>, session: &mut SessionStore) -> bool {
        match result {
            Ok(profile) => {
                session.set_user(profile);
                self.phase = LoginPhase::Succeeded;
                true
            }
            Err(e) => {
                log::warn!("login failed: {e}");
                self.error = Some(LOGIN_FAILED_MESSAGE.to_owned());
                self.phase = LoginPhase::Idle;
                false
            }
        }
    }
}

/// Ask `provider` for the profile belonging to `phone`.
///
/// # Errors
///
/// Propagates the provider's [`LoginError`].
pub async fn exchange<P>(provider: &P, phone: &PhoneNumber) -> Result<UserProfile, LoginError>
where
    P: ProfileProvider + ?Sized,
{
    log::debug!("requesting profile for {phone}");
    provider.fetch_profile(phone).await
}

/// Run a whole submission against plain values. Returns `true` on login.
pub async fn submit<P>(form: &mut LoginForm, session: &mut SessionStore, provider: &P) -> bool
where
    P: ProfileProvider + ?Sized,
{
    let Some(phone) = form.begin_submit() else {
        return false;
    };
    let result = exchange(provider, &phone).await;
    form.complete(result, session)
}
