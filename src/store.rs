//! Persistence for the explicit user choice.
//!
//! DESIGN
//! ======
//! The store only moves strings. Parsing and failure handling live in
//! [`load_preference`] / [`save_preference`], which degrade instead of
//! failing: an unreadable or unrecognized value counts as "no choice", and a
//! failed write leaves the new mode in effect for the current page only.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StorageError;
use crate::mode::Mode;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

// =============================================================================
// STORE SEAM
// =============================================================================

/// Origin-scoped string key-value storage.
pub trait PreferenceStore {
    /// # Errors
    ///
    /// Returns a `StorageError` if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns a `StorageError` if the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Session-only store, used when the browser refuses `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// PREFERENCE
// =============================================================================

/// Read the persisted mode, treating failures and unknown values as absent.
pub fn load_preference<S: PreferenceStore + ?Sized>(store: &S, key: &str) -> Option<Mode> {
    let raw = match store.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            log::warn!("ignoring stored theme preference: {e}");
            return None;
        }
    };
    match raw.parse() {
        Ok(mode) => Some(mode),
        Err(e) => {
            log::warn!("ignoring stored theme preference: {e}");
            None
        }
    }
}

/// Persist `mode`. Returns whether the write reached the store.
pub fn save_preference<S: PreferenceStore + ?Sized>(store: &S, key: &str, mode: Mode) -> bool {
    match store.set(key, mode.as_str()) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("theme preference kept for this page only: {e}");
            false
        }
    }
}
