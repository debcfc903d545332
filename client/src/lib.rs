//! # client
//!
//! Leptos + WASM storefront: a product catalog editor and a shopping cart,
//! both persisted in browser `localStorage` with no data backend.
//!
//! `state` holds the catalog and cart stores, which are plain Rust and
//! testable off-browser. `pages` and `components` render them and dispatch
//! user commands straight to store methods.

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
