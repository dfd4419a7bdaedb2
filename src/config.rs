//! Page-level configuration for the UI behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server may embed a JSON object in the `data-ui-config` attribute of
//! `<html>`. Every field is optional; anything missing falls back to the
//! defaults below, which match the markup the templates emit today.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Attribute on the root element that carries the JSON config.
pub const CONFIG_ATTRIBUTE: &str = "data-ui-config";

const DEFAULT_STORAGE_KEY: &str = "theme";
const DEFAULT_DARK_CLASS: &str = "dark";
const DEFAULT_TOGGLE_ID: &str = "theme-toggle";
const DEFAULT_FLASH_DISMISS_MS: u32 = 5_000;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config field `{0}` must not be blank")]
    Invalid(&'static str),
}

// =============================================================================
// TYPES
// =============================================================================

/// Which kind of element the theme toggle is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleKind {
    /// Plain button, activated by `click`.
    #[default]
    Button,
    /// Checkbox input, activated by `change`; its checked state mirrors dark mode.
    Checkbox,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// `localStorage` key holding `"dark"` or `"light"`.
    pub storage_key: String,
    /// Class placed on `<html>` while the dark theme is applied.
    pub dark_class: String,
    /// Element id of the theme toggle control.
    pub toggle_id: String,
    pub toggle_kind: ToggleKind,
    /// Write the resolved theme back to storage when none was stored.
    pub persist_on_first_load: bool,
    /// Delay before flash messages are removed. `0` keeps them.
    pub flash_dismiss_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            toggle_kind: ToggleKind::Button,
            persist_on_first_load: true,
            flash_dismiss_ms: DEFAULT_FLASH_DISMISS_MS,
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a required name is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve config from the optional attribute value, falling back to
    /// defaults when it is missing or unusable.
    pub fn from_attribute(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring {CONFIG_ATTRIBUTE}: {e}");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key"));
        }
        if self.dark_class.trim().is_empty() {
            return Err(ConfigError::Invalid("dark_class"));
        }
        if self.toggle_id.trim().is_empty() {
            return Err(ConfigError::Invalid("toggle_id"));
        }
        Ok(())
    }
}
