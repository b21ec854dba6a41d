//! # client
//!
//! Leptos + WASM frontend. Server-rendered by the `server` crate and
//! hydrated in the browser.
//!
//! This crate contains the app shell, pages, components, tab-scoped client
//! state, and the browser utilities behind the logout, cache-clear, and
//! prefetch flows.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
