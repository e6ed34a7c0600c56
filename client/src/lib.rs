//! # portfolio-client
//!
//! Leptos + WASM frontend for the personal portfolio site: profile, skills,
//! and projects pages with a persisted light/dark theme.
//!
//! This crate contains the theme state manager, the static site content, the
//! pages, and their components. The root `portfolio` binary renders it on the
//! server; the `hydrate` build attaches it in the browser.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod theme;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
