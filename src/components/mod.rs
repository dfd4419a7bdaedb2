//! Leptos components for hosts that render with Leptos instead of binding
//! server-rendered markup.

pub mod theme_toggle;

pub use theme_toggle::ThemeToggle;
