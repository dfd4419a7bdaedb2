//! Independent leaf behaviors bound by data attributes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each behavior keeps its decisions in a small state type that is tested
//! natively, and a hydrate-only `bind` that finds its markup and forwards DOM
//! events into that state. Behaviors share nothing with each other or with
//! the theme manager.

pub mod dropdown;
pub mod expander;
pub mod flash;
pub mod password;

/// Bind every leaf behavior present in `document`.
#[cfg(feature = "hydrate")]
pub fn bind_all(document: &web_sys::Document, config: &crate::config::UiConfig) {
    dropdown::bind(document);
    flash::bind(document, config);
    password::bind(document);
    expander::bind(document);
}
