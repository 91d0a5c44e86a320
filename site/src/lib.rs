//! # site
//!
//! Leptos + WASM front end for the portfolio page. Renders the fixed page
//! structure (loader, stat counters, theme toggle, skills panel, testimonial
//! carousel and modal) and drives the `widgets` state machines from browser
//! events.
//!
//! Browser glue is compiled only with the `csr` feature. Without it every DOM
//! helper is a no-op, which keeps the crate buildable and testable natively.

pub mod app;
pub mod components;
pub mod util;

/// WASM entry point: install logging and mount the page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
