//! Profile source configuration.
//!
//! The browser bundle picks its source at build time from `PROFILE_SOURCE`:
//! - unset, empty, or `fixture`: bundled profile after the default delay
//! - `fixture:<ms>`: bundled profile after `<ms>` milliseconds
//! - `randomuser`: the public random-user API
//! - `local`: this app's `/api/login` passthrough
//! - any `http://`, `https://`, or `/`-rooted URL: that endpoint

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

pub const RANDOM_USER_ENDPOINT: &str = "https://randomuser.me/api/?results=1";
pub const LOCAL_ENDPOINT: &str = "/api/login";
pub const DEFAULT_FIXTURE_DELAY_MS: u64 = 1000;

/// Error returned by [`ProfileSource::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("unknown PROFILE_SOURCE: {0}")]
    Unknown(String),

    #[error("invalid fixture delay: {0}")]
    InvalidDelay(String),
}

/// Where login profiles come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileSource {
    Fixture { delay_ms: u64 },
    Remote { endpoint: String },
}

impl Default for ProfileSource {
    fn default() -> Self {
        Self::Fixture { delay_ms: DEFAULT_FIXTURE_DELAY_MS }
    }
}

impl ProfileSource {
    /// Parse a `PROFILE_SOURCE` value; `None` yields the default.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] for unrecognised values or a non-numeric delay.
    pub fn parse(raw: Option<&str>) -> Result<Self, SourceError> {
        let raw = raw.map(str::trim).unwrap_or_default();
        match raw {
            "" | "fixture" => Ok(Self::default()),
            "randomuser" => Ok(Self::Remote { endpoint: RANDOM_USER_ENDPOINT.to_owned() }),
            "local" => Ok(Self::Remote { endpoint: LOCAL_ENDPOINT.to_owned() }),
            other => {
                if let Some(ms) = other.strip_prefix("fixture:") {
                    let delay_ms = ms
                        .parse::<u64>()
                        .map_err(|_| SourceError::InvalidDelay(ms.to_owned()))?;
                    return Ok(Self::Fixture { delay_ms });
                }
                if other.starts_with("http://") || other.starts_with("https://") || other.starts_with('/') {
                    return Ok(Self::Remote { endpoint: other.to_owned() });
                }
                Err(SourceError::Unknown(other.to_owned()))
            }
        }
    }

    /// Source baked in at build time, falling back to the default on a bad value.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::parse(option_env!("PROFILE_SOURCE")).unwrap_or_else(|e| {
            log::warn!("{e}; using fixture profile source");
            Self::default()
        })
    }
}
