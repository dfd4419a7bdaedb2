//! Theme preference manager: resolve, apply, persist, toggle.
//!
//! DESIGN
//! ======
//! Two phases, mirroring page load:
//! 1. `resolve_and_apply` runs as soon as the script executes, before the
//!    DOM is ready, so the page never paints with the wrong theme.
//! 2. `bind_toggle` runs once content is ready and wires the optional toggle
//!    control. It re-reads storage instead of trusting phase 1, since the two
//!    may run from separate entry points.
//!
//! The applied theme lives only in the root marker class; the manager keeps
//! no copy of it, so there is nothing to drift out of sync.
//!
//! TRADE-OFFS
//! ==========
//! Storage errors are logged and swallowed. A blocked `localStorage` costs
//! the user persistence, never a broken page.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::rc::Rc;

use crate::config::UiConfig;
use crate::theme::preference::{Theme, resolve};
use crate::util::dom::{ThemeRoot, ToggleControl};
use crate::util::storage::PreferenceStore;

pub struct ThemePreferenceManager<S, R> {
    store: S,
    root: R,
    storage_key: String,
    persist_on_first_load: bool,
}

impl<S: PreferenceStore, R: ThemeRoot> ThemePreferenceManager<S, R> {
    pub fn new(store: S, root: R, config: &UiConfig) -> Self {
        Self {
            store,
            root,
            storage_key: config.storage_key.clone(),
            persist_on_first_load: config.persist_on_first_load,
        }
    }

    /// The explicit stored preference, if any.
    ///
    /// Unreadable storage and unrecognized values both read as `None`.
    pub fn stored_preference(&self) -> Option<Theme> {
        match self.store.get(&self.storage_key) {
            Ok(Some(raw)) => {
                let theme = Theme::from_stored(&raw);
                if theme.is_none() {
                    log::debug!("ignoring stored theme {raw:?}");
                }
                theme
            }
            Ok(None) => None,
            Err(e) => {
                log::warn!("theme preference read failed: {e}");
                None
            }
        }
    }

    /// The theme that should be showing given current storage and system.
    pub fn resolve(&self, system_prefers_dark: bool) -> Theme {
        resolve(self.stored_preference(), system_prefers_dark)
    }

    /// The theme currently applied to the root element.
    pub fn applied(&self) -> Theme {
        Theme::from_dark(self.root.is_dark())
    }

    /// Resolve the theme and apply it to the root element.
    ///
    /// When nothing was stored and first-load persistence is on, the resolved
    /// theme is written so later loads find an explicit preference.
    pub fn resolve_and_apply(&self, system_prefers_dark: bool) -> Theme {
        let stored = self.stored_preference();
        let theme = resolve(stored, system_prefers_dark);
        self.root.set_dark(theme.is_dark());
        if stored.is_none() && self.persist_on_first_load {
            self.persist(theme);
        }
        log::debug!("applied {theme} theme (stored={stored:?}, system_dark={system_prefers_dark})");
        theme
    }

    /// Flip the applied theme and store it as the explicit preference.
    pub fn toggle(&self) -> Theme {
        let next = self.applied().toggled();
        self.root.set_dark(next.is_dark());
        self.persist(next);
        log::debug!("theme toggled to {next}");
        next
    }

    fn persist(&self, theme: Theme) {
        if let Err(e) = self.store.set(&self.storage_key, theme.as_str()) {
            log::warn!("theme preference write failed: {e}");
        }
    }
}

impl<S, R> ThemePreferenceManager<S, R>
where
    S: PreferenceStore + 'static,
    R: ThemeRoot + 'static,
{
    /// Sync `control` with the resolved theme and make it toggle on activation.
    ///
    /// Returns `false` when there is no control on this page, which is not an
    /// error and leaves storage untouched.
    pub fn bind_toggle<C: ToggleControl>(self: &Rc<Self>, control: Option<C>, system_prefers_dark: bool) -> bool {
        let Some(control) = control else {
            log::debug!("no theme toggle on this page");
            return false;
        };

        control.set_checked(self.resolve(system_prefers_dark).is_dark());

        let manager = Rc::clone(self);
        let handle = control.clone();
        control.on_activate(Box::new(move || {
            let next = manager.toggle();
            handle.set_checked(next.is_dark());
        }));
        true
    }
}
