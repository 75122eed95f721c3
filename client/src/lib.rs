//! # consumesafe-client
//!
//! Browser helpers for the ConsumeSafe pages, compiled to WASM with the
//! `hydrate` feature: theme switching, favorites, debounced product
//! suggestions, share links, toasts, scroll reveal, lazy images and a
//! development load-time log.
//!
//! `state`, `net` and most of `util` compile natively so their rules are
//! unit-tested without a browser. `app` and `components` bind them to the
//! DOM and only exist in the `hydrate` build.

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// WASM start hook: panic messages and `log` output go to the console.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
