//! `merchdesk-dashboard`
//!
//! **Responsibility:** Leptos front end for the merchandising back office.
//!
//! This crate provides:
//! - The variant-editing page and its presentational children
//! - Local UI state (dialog toggles, form edits)
//! - Theme-derived layout styles
//!
//! Data fetching, routing, and persistence belong to the embedding
//! container; the page only talks back through its callbacks.

pub mod app;
pub mod components;
pub mod dialog;
pub mod form;
pub mod theme;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point, called automatically when the module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
