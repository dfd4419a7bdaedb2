//! Light/dark theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! `preference` holds the pure resolution rule; `manager` applies it to the
//! document and storage through injected handles so both phases (early apply,
//! later toggle binding) are testable without a browser.

pub mod manager;
pub mod preference;

pub use manager::ThemePreferenceManager;
pub use preference::{Theme, resolve};
