//! Browser seams shared by the theme manager and leaf behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` and `dom` define the traits the theme logic is written against
//! plus their `web-sys` implementations; `browser` collects the hydrate-only
//! lookups (window, document, media queries) behind functions that safely
//! no-op in native builds.

pub mod browser;
pub mod dom;
pub mod storage;

#[cfg(test)]
pub(crate) mod test_support;
