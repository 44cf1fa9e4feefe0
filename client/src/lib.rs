//! # client
//!
//! Leptos CSR frontend. Fetches deployment settings from the host, wires the
//! `session` core to keycloak-js, and gates routes on the session state.
//!
//! Browser-only code sits behind the `csr` feature; without it the crate
//! builds natively so pure helpers can be unit tested.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::mount_to_body(app::App);
}
