//! Display mode and the preference resolver.
//!
//! DESIGN
//! ======
//! `Mode` is strictly two-valued. Its textual form (`"light"` / `"dark"`) is
//! shared by the persisted preference and the root `data-theme` attribute,
//! so both go through [`Mode::as_str`] and [`str::parse`].

use std::fmt;
use std::str::FromStr;

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

/// The active visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// Literal value used in storage and in the root attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode. There is no self-transition.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode: {0:?}")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseModeError(other.to_owned())),
        }
    }
}

/// Compute the active mode at attach time.
///
/// An explicit persisted choice always wins. Without one, the system
/// color-scheme preference decides.
#[must_use]
pub fn resolve_mode(persisted: Option<Mode>, system_prefers_dark: bool) -> Mode {
    match persisted {
        Some(mode) => mode,
        None if system_prefers_dark => Mode::Dark,
        None => Mode::Light,
    }
}
