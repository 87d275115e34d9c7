//! # agency-console
//!
//! Leptos + WASM single-page console for the agency workflow: series
//! intake, shipment packaging, asset activation, and authenticated file
//! downloads. All durable state lives behind a remote REST API; this crate
//! renders tables, dashboards, and modals and issues the HTTP calls.
//!
//! The `csr` feature enables the browser half (rendering, fetch, timers,
//! storage). Without it the crate builds as a plain rlib whose browser
//! touchpoints are stubs, and that configuration is what `cargo test` runs.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: initialize logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
