//! Page boot sequence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wasm module is loaded from `<head>`. On start it applies the theme
//! immediately, then waits for the document to finish parsing before it
//! looks for the toggle control and the leaf behaviors' markup.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use std::rc::Rc;

use crate::theme::{Theme, ThemePreferenceManager};
use crate::util::dom::{ThemeRoot, ToggleControl};
use crate::util::storage::PreferenceStore;

/// Work deferred until the DOM is ready.
pub type ReadyTask = Box<dyn FnOnce()>;

/// Run both theme phases: apply now, bind the toggle once `when_ready` fires.
///
/// `find_control` is only called at ready time, when the element can exist.
pub fn boot_theme<S, R, C>(
    manager: Rc<ThemePreferenceManager<S, R>>,
    system_prefers_dark: bool,
    find_control: impl FnOnce() -> Option<C> + 'static,
    when_ready: impl FnOnce(ReadyTask),
) -> Theme
where
    S: PreferenceStore + 'static,
    R: ThemeRoot + 'static,
    C: ToggleControl,
{
    let theme = manager.resolve_and_apply(system_prefers_dark);
    when_ready(Box::new(move || {
        manager.bind_toggle(find_control(), system_prefers_dark);
    }));
    theme
}

/// Browser entry point.
#[cfg(feature = "hydrate")]
pub fn run() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = crate::util::browser::page_config();
    let system_prefers_dark = crate::util::browser::system_prefers_dark();
    let Some(manager) = crate::util::browser::theme_manager_for(&config) else {
        log::warn!("no document element; skipping theme setup");
        return;
    };

    let toggle_config = config.clone();
    boot_theme(
        Rc::new(manager),
        system_prefers_dark,
        move || crate::util::browser::theme_toggle(&toggle_config),
        on_ready,
    );

    on_ready(Box::new(move || {
        if let Some(document) = crate::util::browser::document() {
            crate::behaviors::bind_all(&document, &config);
        }
    }));
}

/// Run `task` once the document has been parsed.
#[cfg(feature = "hydrate")]
fn on_ready(task: ReadyTask) {
    let Some(document) = crate::util::browser::document() else {
        return;
    };
    if document.ready_state() != "loading" {
        task();
        return;
    }
    let mut task = Some(task);
    crate::util::browser::listen(document.as_ref(), "DOMContentLoaded", move |_| {
        if let Some(task) = task.take() {
            task();
        }
    });
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    run();
}
