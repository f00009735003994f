//! # client
//!
//! Leptos + WASM frontend for the points-of-interest map demo.
//!
//! Three routes: login (`/`), signup (`/signup`) and the guarded map
//! (`/map`). The session lives only in memory and is shared through Leptos
//! context; the map widget lifecycle is delegated to the `atlas` crate via
//! the `MapHost` bridge component.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
