//! Profile providers: where a login gets its `UserProfile` from.
//!
//! DESIGN
//! ======
//! `ProfileProvider` is the one capability the login flow depends on.
//! `FixtureProvider` returns the bundled demo profile after a simulated
//! delay; `RemoteProvider` fetches a random-user style endpoint.
//! `ProfileClient` dispatches to either, built from a [`ProfileSource`].
//!
//! Browser builds (`hydrate`) talk to the network with `gloo-net`. Other
//! builds have no fetch transport, so `RemoteProvider` reports
//! [`LoginError::Unavailable`] there.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::time::Duration;

use profiles::UserProfile;
use profiles::envelope::EnvelopeError;
use profiles::fixture::demo_profile;
use profiles::phone::PhoneNumber;

use super::source::ProfileSource;
use crate::util::timer;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while acquiring a profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The request never produced a response.
    #[error("profile request failed: {0}")]
    Network(String),

    /// The profile source answered with a non-success status.
    #[error("profile request failed: status {0}")]
    Status(u16),

    /// A response arrived but did not contain a usable profile.
    #[error("malformed profile response: {0}")]
    MalformedResponse(String),

    /// No network transport in this build.
    #[error("profile source not available on server")]
    Unavailable,
}

impl From<EnvelopeError> for LoginError {
    fn from(err: EnvelopeError) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

// =============================================================================
// PROVIDER TRAIT
// =============================================================================

/// Exchanges a validated phone number for exactly one profile.
///
/// Futures are not `Send`: browser fetch futures are tied to the JS event loop.
#[async_trait::async_trait(?Send)]
pub trait ProfileProvider {
    /// Fetch the profile for `phone`.
    ///
    /// # Errors
    ///
    /// Returns a [`LoginError`] if the source is unreachable, answers with a
    /// non-success status, or returns no well-formed profile.
    async fn fetch_profile(&self, phone: &PhoneNumber) -> Result<UserProfile, LoginError>;
}

// =============================================================================
// FIXTURE
// =============================================================================

/// Returns a fixed profile after `delay`, standing in for a network call.
#[derive(Clone, Debug)]
pub struct FixtureProvider {
    profile: UserProfile,
    delay: Duration,
}

impl FixtureProvider {
    #[must_use]
    pub fn new(profile: UserProfile, delay: Duration) -> Self {
        Self { profile, delay }
    }

    /// The bundled demo profile with the given delay.
    #[must_use]
    pub fn demo(delay: Duration) -> Self {
        Self::new(demo_profile(), delay)
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait::async_trait(?Send)]
impl ProfileProvider for FixtureProvider {
    async fn fetch_profile(&self, _phone: &PhoneNumber) -> Result<UserProfile, LoginError> {
        timer::sleep(self.delay).await;
        Ok(self.profile.clone())
    }
}

// =============================================================================
// REMOTE
// =============================================================================

/// Fetches `GET {endpoint}` and takes `results[0]` from the response.
#[derive(Clone, Debug)]
pub struct RemoteProvider {
    endpoint: String,
}

impl RemoteProvider {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl ProfileProvider for RemoteProvider {
    async fn fetch_profile(&self, _phone: &PhoneNumber) -> Result<UserProfile, LoginError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint)
                .send()
                .await
                .map_err(|e| LoginError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(LoginError::Status(resp.status()));
            }
            let body = resp.text().await.map_err(|e| LoginError::Network(e.to_string()))?;
            Ok(profiles::envelope::first_profile(&body)?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(LoginError::Unavailable)
        }
    }
}

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete provider chosen at composition time from a [`ProfileSource`].
#[derive(Clone, Debug)]
pub enum ProfileClient {
    Fixture(FixtureProvider),
    Remote(RemoteProvider),
}

impl ProfileClient {
    #[must_use]
    pub fn from_source(source: &ProfileSource) -> Self {
        match source {
            ProfileSource::Fixture { delay_ms } => Self::Fixture(FixtureProvider::demo(Duration::from_millis(*delay_ms))),
            ProfileSource::Remote { endpoint } => Self::Remote(RemoteProvider::new(endpoint.clone())),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ProfileProvider for ProfileClient {
    async fn fetch_profile(&self, phone: &PhoneNumber) -> Result<UserProfile, LoginError> {
        match self {
            Self::Fixture(p) => p.fetch_profile(phone).await,
            Self::Remote(p) => p.fetch_profile(phone).await,
        }
    }
}
