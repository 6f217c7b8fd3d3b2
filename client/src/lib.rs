//! # astrax-client
//!
//! Leptos frontend for the AstraX Fusion Tech site: a single scrolling page
//! with scroll-spy navigation, tabbed service and training catalogs,
//! reveal-on-scroll sections, a validated contact form, and a startup splash.
//!
//! Built twice: with `ssr` for server rendering inside `astrax-server`, and
//! with `hydrate` as the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod consts;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger not installed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
