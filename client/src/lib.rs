//! # activos-client
//!
//! Leptos + WASM frontend for the asset-tracking administration UI.
//!
//! This crate contains pages, components, application state, the REST
//! client facade, and formatting/validation utilities. The `hydrate`
//! feature builds the browser bundle; the `ssr` feature lets the host
//! server render the same `App` on the server.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) is harmless; keep the first logger.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
