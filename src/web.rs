//! Browser bindings: `web-sys` implementations of the element and store
//! seams, plus the exported attach entry point.
//!
//! The host page calls [`attach_theme_toggle`] from its behavior-attachment
//! hook. The controller moves into the click listener, which lives for the
//! lifetime of the page. The bound marker is written only after the
//! listener is in place (see [`attach_once`]).

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, Storage, SvgElement, Window};

use crate::config::{ThemeConfig, console_log_level};
use crate::consts::DARK_SCHEME_QUERY;
use crate::controller::attach_once;
use crate::error::{StorageError, ThemeError};
use crate::store::{MemoryStore, PreferenceStore};
use crate::sync::{ThemeDocument, ThemeElement};

fn dom_error(e: &JsValue) -> ThemeError {
    ThemeError::Dom(format!("{e:?}"))
}

// =============================================================================
// ELEMENTS
// =============================================================================

#[derive(Clone, Debug)]
pub struct DomElement(pub Element);

impl ThemeElement for DomElement {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.0.set_attribute(name, value).map_err(|e| dom_error(&e))
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.0.has_attribute(name)
    }

    fn toggle_class(&self, class: &str, present: bool) -> Result<(), ThemeError> {
        self.0
            .class_list()
            .toggle_with_force(class, present)
            .map(|_| ())
            .map_err(|e| dom_error(&e))
    }

    fn set_display(&self, value: &str) -> Result<(), ThemeError> {
        // Icons are either HTML wrappers or inline SVG.
        let style = if let Some(el) = self.0.dyn_ref::<HtmlElement>() {
            el.style()
        } else if let Some(el) = self.0.dyn_ref::<SvgElement>() {
            el.style()
        } else {
            return Err(ThemeError::Dom(format!("<{}> has no inline style", self.0.tag_name())));
        };
        style.set_property("display", value).map_err(|e| dom_error(&e))
    }
}

impl ThemeDocument for Document {
    type Element = DomElement;

    fn query(&self, selector: &str) -> Result<Option<DomElement>, ThemeError> {
        Ok(self.query_selector(selector).map_err(|e| dom_error(&e))?.map(DomElement))
    }

    fn by_id(&self, id: &str) -> Option<DomElement> {
        self.get_element_by_id(id).map(DomElement)
    }

    fn root(&self) -> Option<DomElement> {
        self.document_element().map(DomElement)
    }
}

// =============================================================================
// STORAGE
// =============================================================================

/// `localStorage`, or a session-only fallback when the browser refuses it
/// (privacy modes, sandboxed frames).
#[derive(Debug)]
pub enum BrowserStore {
    Local(Storage),
    Session(MemoryStore),
}

impl BrowserStore {
    #[must_use]
    pub fn open(window: &Window) -> Self {
        match local_storage(window) {
            Ok(storage) => Self::Local(storage),
            Err(e) => {
                log::warn!("theme preference will not persist: {e}");
                Self::Session(MemoryStore::new())
            }
        }
    }
}

fn local_storage(window: &Window) -> Result<Storage, StorageError> {
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(e) => Err(StorageError::Read(format!("{e:?}"))),
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Local(storage) => storage.get_item(key).map_err(|e| StorageError::Read(format!("{e:?}"))),
            Self::Session(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}"))),
            Self::Session(memory) => memory.set(key, value),
        }
    }
}

/// One-time snapshot of `prefers-color-scheme`.
fn system_prefers_dark(window: &Window) -> bool {
    match window.match_media(DARK_SCHEME_QUERY) {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(e) => {
            log::warn!("prefers-color-scheme unavailable: {e:?}");
            false
        }
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(console_log_level()) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
}

/// Render the initial mode and bind the toggle's click listener.
///
/// `config_json` optionally overrides fields of [`ThemeConfig`]. Returns
/// `false` without doing anything if the control is already bound.
///
/// # Errors
///
/// Throws if the config is invalid or the page lacks the control, either
/// icon, or the document root.
#[wasm_bindgen]
pub fn attach_theme_toggle(config_json: Option<String>) -> Result<bool, JsError> {
    Ok(attach(config_json.as_deref())?)
}

fn attach(config_json: Option<&str>) -> Result<bool, ThemeError> {
    let config = ThemeConfig::from_json(config_json)?;
    let window = web_sys::window().ok_or_else(|| ThemeError::MissingElement("window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| ThemeError::MissingElement("document".into()))?;
    let store = BrowserStore::open(&window);

    attach_once(&document, store, config, system_prefers_dark(&window), |control, mut controller| {
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            if let Err(e) = controller.toggle() {
                log::error!("theme toggle failed: {e}");
            }
        });
        control
            .0
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|e| dom_error(&e))?;
        on_click.forget();
        Ok(())
    })
}
