//! Fixed DOM and storage contract shared with the host page and stylesheet.

/// `localStorage` key holding the explicit user choice.
pub const STORAGE_KEY: &str = "theme";

/// Selector for the toggle control.
pub const TOGGLE_SELECTOR: &str = "[data-theme-toggle]";

/// Element id of the icon shown while dark mode is active.
pub const SUN_ICON_ID: &str = "theme-switch-sun";

/// Element id of the icon shown while light mode is active.
pub const MOON_ICON_ID: &str = "theme-switch-moon";

/// Attribute on `<html>` that stylesheets key off.
pub const ROOT_ATTRIBUTE: &str = "data-theme";

/// Marks a control that already has a click listener.
pub const PROCESSED_ATTRIBUTE: &str = "data-theme-toggle-processed";

pub const ARIA_LABEL: &str = "aria-label";

pub const SUN_CLASS: &str = "sun";
pub const MOON_CLASS: &str = "moon";

/// Inline `display` values for the visible and hidden icon.
pub const DISPLAY_SHOWN: &str = "block";
pub const DISPLAY_HIDDEN: &str = "none";

/// Label while dark mode is active. Names the action, not the state.
pub const LABEL_TO_LIGHT: &str = "Change to light theme";

/// Label while light mode is active.
pub const LABEL_TO_DARK: &str = "Change to dark theme";

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
