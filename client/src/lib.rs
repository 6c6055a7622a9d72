//! # client
//!
//! Leptos + WASM frontend for the SVG to JSX converter.
//!
//! This crate contains the converter page, its presentational components,
//! the reducer-driven converter state, the REST helper for the conversion
//! endpoint, and browser utilities for clipboard and downloads.

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
