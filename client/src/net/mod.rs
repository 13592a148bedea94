//! Networking modules for profile acquisition.
//!
//! SYSTEM CONTEXT
//! ==============
//! `source` describes where profiles come from and `provider` turns that
//! description into something the login flow can await.

pub mod provider;
pub mod source;
