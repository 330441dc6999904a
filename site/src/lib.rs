//! # site
//!
//! Leptos + WASM front-end for the portfolio website.
//!
//! This crate contains pages, components, the static project catalog, gallery
//! selection state, and browser utilities. It integrates with the `starfield`
//! crate for the animated hero background via the `StarfieldHost` bridge
//! component.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
