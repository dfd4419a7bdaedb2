//! # site-ui
//!
//! Browser behaviors for the server-rendered site, compiled to WASM.
//!
//! The core is theme preference handling: resolve the light/dark theme from
//! `localStorage` and the system color scheme, apply it to `<html>`, and keep
//! it in sync with a toggle control. Alongside it live a few independent leaf
//! behaviors (dropdowns, flash messages, password visibility, text expanders)
//! that bind to markup by data attributes.
//!
//! Browser glue is compiled only with the `hydrate` feature; everything else
//! builds and tests natively.

pub mod behaviors;
pub mod boot;
pub mod components;
pub mod config;
pub mod theme;
pub mod util;
