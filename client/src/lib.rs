//! # client
//!
//! Leptos + WASM frontend for the sign-in flow.
//!
//! This crate contains the login/register pages, the session context, the
//! route guard that protects the home view, and the HTTP helpers that talk
//! to the `/users/*` API. The `server` crate renders it with the `ssr`
//! feature; the browser bundle is built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
