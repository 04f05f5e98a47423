//! # folio-client
//!
//! Leptos + WASM frontend for a static personal portfolio site. Replaces the
//! hand-written page-enhancement script with a Rust-native UI layer: header
//! chrome (mobile nav drawer, active link, theme switch) and the experience
//! timeline, whose card order is derived from each card's date label.
//!
//! Pure logic (date parsing, ordering, path matching) lives in `state` and
//! `util` and runs natively under `cargo test`; browser effects are gated
//! behind the `csr` feature.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and mounts the app to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(crate::app::App);
}
