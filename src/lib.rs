//! # tweeter-web
//!
//! Leptos + WASM client for Tweeter: login, signup and email verification
//! screens plus a guarded home/profile area, talking to an external auth API.
//!
//! The session store, auth client, form validation, submit flows and route
//! table are plain Rust and build for any target, which is how they are tested.
//! Views, the `localStorage` backend and the `gloo-net` transport only exist on
//! `wasm32`.

#[cfg(target_arch = "wasm32")]
pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
pub mod features;
pub mod routes;

/// Installs the panic hook and routes `tracing` events to the browser console.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger already set: {err}").into());
    }
}
