//! # despacho-web
//!
//! Leptos + WASM frontend for the logistics back office. The backend is an
//! external REST API; this crate owns the session/authentication glue
//! (token store, auth client, recovery flow, route guard, role-gated menu)
//! and the thin pages around it.

pub mod app;
pub mod components;
pub mod guard;
pub mod nav;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
