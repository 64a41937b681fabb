//! Host-supplied configuration.
//!
//! DESIGN
//! ======
//! Every field defaults to the fixed contract in [`crate::consts`]. Hosts
//! pass a partial JSON object to override individual fields, typically to
//! supply translated labels.

use serde::Deserialize;

use crate::consts::{LABEL_TO_DARK, LABEL_TO_LIGHT, MOON_ICON_ID, STORAGE_KEY, SUN_ICON_ID, TOGGLE_SELECTOR};
use crate::error::ThemeError;
use crate::mode::Mode;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub toggle_selector: String,
    pub sun_icon_id: String,
    pub moon_icon_id: String,
    /// Control label while dark mode is active.
    pub label_to_light: String,
    /// Control label while light mode is active.
    pub label_to_dark: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            toggle_selector: TOGGLE_SELECTOR.to_owned(),
            sun_icon_id: SUN_ICON_ID.to_owned(),
            moon_icon_id: MOON_ICON_ID.to_owned(),
            label_to_light: LABEL_TO_LIGHT.to_owned(),
            label_to_dark: LABEL_TO_DARK.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse an optional JSON override. `None` or blank input yields defaults.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the JSON is malformed or names an unknown field.
    pub fn from_json(json: Option<&str>) -> Result<Self, ThemeError> {
        match json.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(raw) => Ok(serde_json::from_str(raw)?),
        }
    }

    /// The control label for `mode`, naming the mode a click switches to.
    #[must_use]
    pub fn label_for(&self, mode: Mode) -> &str {
        match mode {
            Mode::Dark => &self.label_to_light,
            Mode::Light => &self.label_to_dark,
        }
    }
}

/// Console verbosity in the browser. Debug builds include the attach and
/// toggle transitions logged at `debug`.
#[must_use]
pub fn console_log_level() -> log::Level {
    if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info }
}
