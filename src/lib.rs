//! # techmarket
//!
//! Leptos + WASM interactivity for the TechMarket static storefront.
//!
//! Each storefront page is static HTML. This crate loads the shopper's
//! compare list, cart and favorites from `localStorage`, works out which page
//! is showing, and wires that page's controls to the list mutators on the
//! [`storefront::Storefront`] controller.
//!
//! Browser glue lives behind the `csr` feature; everything else (state,
//! persistence, catalog queries, page dispatch) compiles and tests natively.

pub mod catalog;
pub mod components;
pub mod config;
#[cfg(feature = "csr")]
pub mod pages;
pub mod router;
pub mod state;
pub mod store;
pub mod storefront;
pub mod ui;
pub mod util;

/// WASM entry point: installs logging and boots the current page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    pages::boot();
}
