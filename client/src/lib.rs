//! # deckview-client
//!
//! Leptos + WASM shell for the presentation preview controller.
//!
//! This crate owns only browser concerns: markup, event binding, the
//! `gloo-net` transport and the `web-sys` download/timer host. All state
//! transitions and view derivation live in the `deckview` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
