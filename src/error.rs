//! Error types for attach, synchronization and persistence.

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The page is missing an element the toggle needs. This is a placement
    /// defect in the host page, not something to recover from at runtime.
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("dom operation failed: {0}")]
    Dom(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Failures of the backing preference store. These never escape the
/// controller; see [`crate::store::load_preference`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}
