//! Phone-number validation for the login form.
//!
//! A valid number is exactly 11 ASCII digits starting with `09`
//! (`^09\d{9}$`). Failures come back as typed field errors rather than
//! panics so the form can render them inline.

use std::fmt;

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

/// Required number of characters in a phone number.
pub const PHONE_LEN: usize = 11;

/// Fixed leading digits of every accepted number.
pub const PHONE_PREFIX: &str = "09";

// =============================================================================
// ISSUES
// =============================================================================

/// A single reason a phone string was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PhoneIssue {
    #[error("Phone number is required")]
    Required,

    #[error("Phone number must be exactly 11 digits")]
    Length,

    #[error("Phone number must be 11 digits starting with 09")]
    Pattern,
}

/// Form field an error is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Phone,
}

/// A message scoped to one form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Every field error produced by one validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn from_phone_issues(issues: &[PhoneIssue]) -> Self {
        let errors = issues
            .iter()
            .map(|issue| FieldError { field: Field::Phone, message: issue.to_string() })
            .collect();
        Self { errors }
    }

    /// First message recorded against `field`, if any.
    #[must_use]
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

// =============================================================================
// PHONE NUMBER
// =============================================================================

/// A phone string that passed [`validate_phone`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

fn matches_pattern(raw: &str) -> bool {
    raw.len() == PHONE_LEN
        && raw.starts_with(PHONE_PREFIX)
        && raw[PHONE_PREFIX.len()..].bytes().all(|b| b.is_ascii_digit())
}

/// Validate a raw phone string.
///
/// Empty input reports only [`PhoneIssue::Required`]. Otherwise every failing
/// check is reported, length before pattern. The input is not trimmed.
///
/// # Errors
///
/// Returns the list of issues when the string is not `^09\d{9}$`.
pub fn validate_phone(raw: &str) -> Result<PhoneNumber, Vec<PhoneIssue>> {
    if raw.is_empty() {
        return Err(vec![PhoneIssue::Required]);
    }

    let mut issues = Vec::new();
    if raw.chars().count() != PHONE_LEN {
        issues.push(PhoneIssue::Length);
    }
    if !matches_pattern(raw) {
        issues.push(PhoneIssue::Pattern);
    }

    if issues.is_empty() { Ok(PhoneNumber(raw.to_owned())) } else { Err(issues) }
}

/// Validate the login form's fields.
///
/// # Errors
///
/// Returns field-scoped messages for every failing check.
pub fn validate_login(phone: &str) -> Result<PhoneNumber, ValidationErrors> {
    validate_phone(phone).map_err(|issues| ValidationErrors::from_phone_issues(&issues))
}
