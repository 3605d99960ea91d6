//! Display preference slot.
//!
//! The theme lives under its own key, independent of the cart snapshot, and
//! is stored as bare text (`light` / `dark`) rather than JSON.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CacheError, KeyValueStore};

/// Key holding the theme preference.
pub const THEME_KEY: &str = "theme";

/// Light or dark display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Interpret a stored value. Anything other than `dark` reads as light.
    fn from_stored(bytes: &[u8]) -> Self {
        match std::str::from_utf8(bytes).map(str::trim) {
            Ok(s) if s.eq_ignore_ascii_case("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a theme name fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme {0:?} (expected \"light\" or \"dark\")")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

/// Reads and writes the theme slot.
#[derive(Debug, Clone)]
pub struct ThemePreference<S> {
    store: S,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current theme; light when nothing has been stored yet.
    pub fn get(&self) -> Result<Theme, CacheError> {
        Ok(self
            .store
            .get(THEME_KEY)?
            .map(|bytes| Theme::from_stored(&bytes))
            .unwrap_or_default())
    }

    pub fn set(&self, theme: Theme) -> Result<(), CacheError> {
        self.store.set(THEME_KEY, theme.as_str().as_bytes())
    }

    /// Flip the stored theme and return the new value.
    pub fn toggle(&self) -> Result<Theme, CacheError> {
        let next = self.get()?.toggled();
        self.set(next)?;
        Ok(next)
    }
}
