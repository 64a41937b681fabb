//! Light/dark theme toggle for the browser.
//!
//! Compiled to WebAssembly and attached by the host page. On attach it
//! resolves the active mode from the visitor's stored choice and the
//! system color-scheme preference, renders it onto the toggle control and
//! the document root, and flips and persists the mode on every click.
//! Styling is left entirely to the page's stylesheet, which keys off the
//! root `data-theme` attribute.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`mode`] | `Mode` and the preference resolver |
//! | [`sync`] | Element seam and the DOM synchronizer |
//! | [`store`] | Preference storage seam and degrade-on-failure helpers |
//! | [`controller`] | Per-attach state machine handling clicks |
//! | [`config`] | Host overrides for keys, selectors and labels |
//! | [`error`] | Error types |
//! | [`consts`] | Fixed DOM and storage contract |
//! | `web` | `web-sys` bindings and wasm exports (`browser` feature) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod mode;
pub mod store;
pub mod sync;
#[cfg(feature = "browser")]
pub mod web;

#[cfg(test)]
mod fake;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::{StorageError, ThemeError};
pub use mode::{Mode, resolve_mode};
