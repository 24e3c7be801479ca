//! # polytechub-ui
//!
//! Leptos + WASM single-page client for the Polytechub todo service.
//! Users sign up and log in (password or one-time code), manage main todo
//! lists, and manage sub-tasks within each list against an external REST
//! API. This crate contains pages, components, application state, the REST
//! client, and the session/route-guard plumbing.
//!
//! Built natively (no features) for unit tests; built with `--features csr`
//! for the browser.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
