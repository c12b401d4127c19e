//! # pagination
//!
//! Leptos + WASM pagination widget. Renders a virtualized horizontal strip
//! of page numbers with arrow stepping and direct page entry, reporting each
//! selected page to the parent view.
//!
//! The interaction rules and pixel geometry are plain Rust in `state` and
//! `util`; `components` binds them to the DOM. `app` and `pages` provide the
//! demo host page served by the `pagination-host` binary.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
