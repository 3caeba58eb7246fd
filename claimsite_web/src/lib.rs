//! Browser front end for the CheckThat! 2025 paper page.
//!
//! On native targets only [`ui_model`] is compiled, so the class and style
//! decisions stay testable with a plain `cargo test`. The Leptos app needs
//! `--features web` on wasm32.

pub mod ui_model;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
