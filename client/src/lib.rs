//! # client
//!
//! Leptos + WASM frontend for the internship board.
//!
//! This crate contains the internships page, its components (cards, details
//! dialog, auth modal, toasts), client-side state, and the browser HTTP layer
//! that executes `listings` requests against the external backend.

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
