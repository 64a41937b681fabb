//! Interaction handler: owns the current mode for one attached toggle.
//!
//! DESIGN
//! ======
//! `ThemeController` is the two-state machine. It is built once per attach
//! with injected elements, a store and the system preference snapshot, and
//! is mutated only by [`ThemeController::toggle`]. The system preference is
//! read once by the caller; later OS-level changes are not observed.
//!
//! [`attach_once`] wraps the whole per-page attach so the run-once guard
//! and its failure paths are exercised without a browser.

use crate::config::ThemeConfig;
use crate::consts::PROCESSED_ATTRIBUTE;
use crate::error::ThemeError;
use crate::mode::{Mode, resolve_mode};
use crate::store::{PreferenceStore, load_preference, save_preference};
use crate::sync::{ThemeDocument, ThemeElement, ThemeElements, apply_mode, find_elements};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct ThemeController<E, S> {
    elements: ThemeElements<E>,
    store: S,
    config: ThemeConfig,
    current: Mode,
}

impl<E: ThemeElement, S: PreferenceStore> ThemeController<E, S> {
    /// Resolve the initial mode and render it.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if the initial render fails.
    pub fn attach(
        elements: ThemeElements<E>,
        store: S,
        config: ThemeConfig,
        system_prefers_dark: bool,
    ) -> Result<Self, ThemeError> {
        let persisted = load_preference(&store, &config.storage_key);
        let current = resolve_mode(persisted, system_prefers_dark);
        log::debug!("theme attach: persisted={persisted:?} system_dark={system_prefers_dark} -> {current}");

        apply_mode(current, &elements, &config)?;
        Ok(Self { elements, store, config, current })
    }

    /// Switch to the other mode: persist, render, then commit.
    ///
    /// A failed persist does not stop the switch. A failed render leaves
    /// `current_mode` unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Dom` if rendering the new mode fails.
    pub fn toggle(&mut self) -> Result<Mode, ThemeError> {
        let next = self.current.flipped();
        save_preference(&self.store, &self.config.storage_key, next);
        apply_mode(next, &self.elements, &self.config)?;
        self.current = next;
        log::debug!("theme toggled to {next}");
        Ok(next)
    }

    #[must_use]
    pub fn current_mode(&self) -> Mode {
        self.current
    }

    #[must_use]
    pub fn elements(&self) -> &ThemeElements<E> {
        &self.elements
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Whether an earlier attach already bound a listener to `control`.
pub fn is_claimed<E: ThemeElement>(control: &E) -> bool {
    control.has_attribute(PROCESSED_ATTRIBUTE)
}

/// Mark `control` as bound. Only call once its listener is in place.
///
/// # Errors
///
/// Returns `Dom` if the marker attribute cannot be written.
pub fn mark_claimed<E: ThemeElement>(control: &E) -> Result<(), ThemeError> {
    control.set_attribute(PROCESSED_ATTRIBUTE, "")
}

/// Full attach flow: look up elements, render the initial mode and hand the
/// controller to `bind_click` to wire up the listener.
///
/// Returns `false` without touching the page if the control is already
/// bound. The control is marked bound only after `bind_click` succeeds, so
/// a failed attach can be retried.
///
/// # Errors
///
/// Returns `MissingElement` if a required element is absent, or `Dom` if
/// rendering, binding or marking fails.
pub fn attach_once<D, S, F>(
    document: &D,
    store: S,
    config: ThemeConfig,
    system_prefers_dark: bool,
    bind_click: F,
) -> Result<bool, ThemeError>
where
    D: ThemeDocument,
    S: PreferenceStore,
    F: FnOnce(&D::Element, ThemeController<D::Element, S>) -> Result<(), ThemeError>,
{
    let elements = find_elements(document, &config)?;
    if is_claimed(&elements.control) {
        log::debug!("theme toggle already bound");
        return Ok(false);
    }

    let control = elements.control.clone();
    let controller = ThemeController::attach(elements, store, config, system_prefers_dark)?;
    bind_click(&control, controller)?;
    mark_claimed(&control)?;
    Ok(true)
}
