//! Client-side application state.
//!
//! `session` is the single source of truth for who is signed in; `login`
//! drives the form that fills it.

pub mod login;
pub mod session;
