//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: guards, form state, and the
//! async hop to the profile provider.

pub mod dashboard;
pub mod login;
