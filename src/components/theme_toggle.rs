//! Theme toggle button.
//!
//! Same behavior as the bound `#theme-toggle` control: flips the class on
//! `<html>` and stores the explicit preference.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::theme::Theme;
use crate::util::browser;

/// Glyph for the button: offer the sun while dark, the moon while light.
pub fn toggle_glyph(theme: Theme) -> &'static str {
    if theme.is_dark() { "☀" } else { "☾" }
}

pub fn toggle_title(theme: Theme) -> &'static str {
    if theme.is_dark() {
        "Switch to light theme"
    } else {
        "Switch to dark theme"
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (theme, set_theme) = signal(browser::current_theme());

    let on_click = move |_| {
        let next = browser::toggle_theme(theme.get_untracked());
        set_theme.set(next);
    };

    view! {
        <button
            class="btn theme-toggle"
            aria-pressed=move || if theme.get().is_dark() { "true" } else { "false" }
            title=move || toggle_title(theme.get())
            on:click=on_click
        >
            {move || toggle_glyph(theme.get())}
        </button>
    }
}
