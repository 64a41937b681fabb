//! DOM synchronizer: projects a [`Mode`] onto the toggle control, the two
//! icons and the document root.
//!
//! DESIGN
//! ======
//! The visible UI is a pure function of the mode. [`ModeView`] computes that
//! projection without touching the DOM; [`apply_mode`] then writes every
//! facet (label, icon visibility, control class, root attribute) in one
//! pass. Elements are reached only through the [`ThemeElement`] trait so the
//! synchronizer runs against fakes in tests and `web-sys` in the browser.

use crate::config::ThemeConfig;
use crate::consts::{ARIA_LABEL, DISPLAY_HIDDEN, DISPLAY_SHOWN, MOON_CLASS, ROOT_ATTRIBUTE, SUN_CLASS};
use crate::error::ThemeError;
use crate::mode::Mode;

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

// =============================================================================
// ELEMENT SEAM
// =============================================================================

/// The handful of element operations the toggle needs.
///
/// Methods take `&self` because DOM handles are shared references into a
/// live document.
pub trait ThemeElement {
    /// Set (or overwrite) an attribute.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if the host rejects the write.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError>;

    fn has_attribute(&self, name: &str) -> bool;

    /// Add `class` when `present`, remove it otherwise.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if the host rejects the class list update.
    fn toggle_class(&self, class: &str, present: bool) -> Result<(), ThemeError>;

    /// Set the inline `display` style.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if the element has no inline style or the write fails.
    fn set_display(&self, value: &str) -> Result<(), ThemeError>;
}

/// Injected references to every element the toggle touches.
#[derive(Clone, Debug)]
pub struct ThemeElements<E> {
    pub control: E,
    pub sun: E,
    pub moon: E,
    pub root: E,
}

/// Element lookup on the host page.
pub trait ThemeDocument {
    type Element: ThemeElement + Clone;

    /// First element matching a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if the selector is invalid.
    fn query(&self, selector: &str) -> Result<Option<Self::Element>, ThemeError>;

    fn by_id(&self, id: &str) -> Option<Self::Element>;

    /// The document root (`<html>`).
    fn root(&self) -> Option<Self::Element>;
}

/// Look up every element the toggle needs.
///
/// # Errors
///
/// Returns `MissingElement` naming the first selector or id with no match.
pub fn find_elements<D: ThemeDocument>(document: &D, config: &ThemeConfig) -> Result<ThemeElements<D::Element>, ThemeError> {
    let control = document
        .query(&config.toggle_selector)?
        .ok_or_else(|| ThemeError::MissingElement(config.toggle_selector.clone()))?;
    let by_id = |id: &str| document.by_id(id).ok_or_else(|| ThemeError::MissingElement(format!("#{id}")));
    let sun = by_id(&config.sun_icon_id)?;
    let moon = by_id(&config.moon_icon_id)?;
    let root = document.root().ok_or_else(|| ThemeError::MissingElement("<html>".into()))?;

    Ok(ThemeElements { control, sun, moon, root })
}

// =============================================================================
// VIEW
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Sun,
    Moon,
}

impl Icon {
    /// Class mirrored onto the control while this icon is visible.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Sun => SUN_CLASS,
            Self::Moon => MOON_CLASS,
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Sun => Self::Moon,
            Self::Moon => Self::Sun,
        }
    }
}

/// Derived UI state for one mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeView<'a> {
    pub label: &'a str,
    pub icon: Icon,
    pub root_value: &'static str,
}

impl<'a> ModeView<'a> {
    #[must_use]
    pub fn new(mode: Mode, config: &'a ThemeConfig) -> Self {
        let icon = match mode {
            Mode::Dark => Icon::Sun,
            Mode::Light => Icon::Moon,
        };
        Self { label: config.label_for(mode), icon, root_value: mode.as_str() }
    }
}

// =============================================================================
// APPLY
// =============================================================================

/// Write the full view for `mode` onto the page.
///
/// Every facet is attempted even when an earlier write fails, so a single
/// host failure never leaves the remaining facets on the previous mode.
///
/// # Errors
///
/// Returns the first `Dom` error reported by any element.
pub fn apply_mode<E: ThemeElement>(mode: Mode, elements: &ThemeElements<E>, config: &ThemeConfig) -> Result<(), ThemeError> {
    let view = ModeView::new(mode, config);
    let (shown, hidden) = match view.icon {
        Icon::Sun => (&elements.sun, &elements.moon),
        Icon::Moon => (&elements.moon, &elements.sun),
    };

    let results = [
        elements.control.set_attribute(ARIA_LABEL, view.label),
        shown.set_display(DISPLAY_SHOWN),
        hidden.set_display(DISPLAY_HIDDEN),
        elements.control.toggle_class(view.icon.class(), true),
        elements.control.toggle_class(view.icon.other().class(), false),
        elements.root.set_attribute(ROOT_ATTRIBUTE, view.root_value),
    ];

    match results.into_iter().find_map(Result::err) {
        Some(e) => Err(e),
        None => {
            log::debug!("applied {mode} mode");
            Ok(())
        }
    }
}
