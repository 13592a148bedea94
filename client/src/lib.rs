//! # client
//!
//! Leptos frontend for the phone-login demo: a login page that exchanges a
//! phone number for a user profile and a protected dashboard that shows it.
//!
//! The session store, login flow, and route guards are plain Rust types so
//! they can be unit tested without a browser; pages wrap them in signals.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
