//! # client
//!
//! Leptos + WASM frontend for the placement predictor.
//!
//! This crate contains the prediction page, its result components, the form
//! state model, and the multipart client for the external `/predict`
//! endpoint. The root host binary renders it on the server with the `ssr`
//! feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: installs browser logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
