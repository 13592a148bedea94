//! Shared user-profile model for the phone-login app.
//!
//! This crate owns the profile record exchanged between profile sources and
//! the client session, plus the phone validation rule. It has no UI or
//! transport dependencies so both `client` and `server` can use it.

pub mod envelope;
pub mod fixture;
pub mod phone;

use std::fmt;

use serde::{Deserialize, Serialize};


// =============================================================================
// USER PROFILE
// =============================================================================

/// The authenticated identity record, shaped like one random-user result.
///
/// Profiles are never mutated after they are received. A new login replaces
/// the whole record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub gender: String,
    pub name: Name,
    pub location: Location,
    pub email: String,
    pub login: Login,
    pub dob: DatedAge,
    pub registered: DatedAge,
    pub phone: String,
    pub cell: String,
    pub id: GovernmentId,
    pub picture: Picture,
    /// Nationality code (e.g. `"US"`).
    pub nat: String,
}

impl UserProfile {
    /// Title, first, and last name joined with spaces (e.g. `"Mr Brayden Johnston"`).
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.name.title, self.name.first, self.name.last)
    }

    /// First and last name only, used for avatar alt text.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub title: String,
    pub first: String,
    pub last: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub street: Street,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postcode: Postcode,
    pub coordinates: Coordinates,
    pub timezone: Timezone,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Street {
    pub number: u32,
    pub name: String,
}

/// Postal code. Random-user emits numbers for some nationalities and strings
/// (e.g. `"V5K 0A1"`) for others, so both are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    Number(u64),
    Text(String),
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Latitude/longitude as decimal strings, exactly as the source sends them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timezone {
    /// UTC offset such as `"+5:45"`.
    pub offset: String,
    pub description: String,
}

/// Internal login sub-record. Carried verbatim; never used for auth decisions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Login {
    pub uuid: String,
    pub username: String,
    pub password: String,
    pub salt: String,
    pub md5: String,
    pub sha1: String,
    pub sha256: String,
}

/// An ISO-8601 timestamp with the age (in years) derived from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatedAge {
    pub date: String,
    pub age: u32,
}

/// Government identifier pair. `value` is `null` for some nationalities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernmentId {
    pub name: String,
    pub value: Option<String>,
}

/// Profile picture URLs at three resolutions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub large: String,
    pub medium: String,
    pub thumbnail: String,
}
