//! Highlight theme identities.
//!
//! Code blocks are styled by one of two highlight palettes. Each palette has
//! a stable identity key (`hljs-light`, `hljs-dark`) that tags the managed
//! stylesheet carrying it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Error;

/// A highlight palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette.
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl Theme {
    /// Both themes, light first.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// The short theme name (`light` / `dark`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The identity key used to tag this theme's stylesheet.
    pub fn key(&self) -> &'static str {
        match self {
            Theme::Light => "hljs-light",
            Theme::Dark => "hljs-dark",
        }
    }

    /// The opposite theme.
    pub fn other(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" | "hljs-light" => Ok(Theme::Light),
            "dark" | "hljs-dark" => Ok(Theme::Dark),
            other => Err(Error::config(format!("Unknown theme: {other}"))),
        }
    }
}

/// A highlight palette failed to load.
///
/// Cloneable so that one failure can be handed to every caller that was
/// waiting on the same coalesced load.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to load theme: {theme} ({reason})")]
pub struct ThemeLoadError {
    /// Theme whose stylesheet failed
    pub theme: Theme,
    /// Transport-level reason
    pub reason: String,
}

impl ThemeLoadError {
    /// Create a new theme load error.
    pub fn new(theme: Theme, reason: impl Into<String>) -> Self {
        Self {
            theme,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_keys() {
        assert_eq!(Theme::Light.key(), "hljs-light");
        assert_eq!(Theme::Dark.key(), "hljs-dark");
    }

    #[test]
    fn test_theme_other() {
        assert_eq!(Theme::Light.other(), Theme::Dark);
        assert_eq!(Theme::Dark.other(), Theme::Light);
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" Light ".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("hljs-dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_serde() {
        let json = serde_json::to_string(&Theme::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn test_theme_load_error_display() {
        let err = ThemeLoadError::new(Theme::Dark, "status 503");
        assert_eq!(err.to_string(), "Failed to load theme: dark (status 503)");
    }
}
