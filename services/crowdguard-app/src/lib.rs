//! CrowdGuard Dashboard - Leptos frontend
//!
//! Browser client for the CrowdGuard crowd-monitoring API.

pub mod api;
pub mod app;
pub mod components;
pub mod session;

pub use app::App;

/// Browser entry point, mounts the dashboard into the statically served shell
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    leptos::mount::mount_to_body(App);
}
