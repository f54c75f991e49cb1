//! # client
//!
//! Leptos + WASM shell for the Pay Buddy money-transfer web app.
//!
//! This crate owns the route table (`routing`), the root `App` with its
//! state and toast providers, the shared layout, and the route-level pages.
//! It is rendered on the server by the `pay-buddy` binary (`ssr` feature)
//! and hydrated in the browser (`hydrate` feature).

pub mod app;
pub mod components;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
