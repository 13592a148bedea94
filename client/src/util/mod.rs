//! Client helpers that sit outside the page tree.
//!
//! `auth` holds the redirect guards shared by the login and dashboard pages;
//! `timer` is the platform sleep used by the fixture provider.

pub mod auth;
pub mod timer;
