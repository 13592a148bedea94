//! Random-user response envelope.
//!
//! DESIGN
//! ======
//! Profile endpoints answer with `{ "results": [ ... ], "info": { ... } }`.
//! Only `results[0]` matters; parsing is a pure function of the body text so
//! the browser transport stays a thin wrapper.

use serde::Deserialize;

use crate::UserProfile;

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

/// Errors produced while extracting a profile from a response body.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EnvelopeError {
    /// The body was not JSON, or `results` held something that is not a profile.
    #[error("response parse failed: {0}")]
    Parse(String),

    /// `results` was missing or empty.
    #[error("response contained no profile")]
    Empty,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    results: Vec<UserProfile>,
}

/// Parse a response body and return its first profile.
///
/// # Errors
///
/// Returns [`EnvelopeError::Parse`] for malformed JSON or profile records and
/// [`EnvelopeError::Empty`] when there is no first result.
pub fn first_profile(body: &str) -> Result<UserProfile, EnvelopeError> {
    let envelope: Envelope = serde_json::from_str(body).map_err(|e| EnvelopeError::Parse(e.to_string()))?;
    envelope.results.into_iter().next().ok_or(EnvelopeError::Empty)
}
