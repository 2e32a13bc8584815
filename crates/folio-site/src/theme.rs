//! Colour-scheme preference
//!
//! The only persisted state of the site: one `colorScheme` flag.

use crate::error::PreferenceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Value of the CSS `color-scheme` property
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Follow the operating system
    #[default]
    Auto,
    Light,
    Dark,
}

impl ColorScheme {
    /// All schemes in menu order
    pub const ALL: [ColorScheme; 3] = [ColorScheme::Auto, ColorScheme::Light, ColorScheme::Dark];

    /// CSS value
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Menu label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "Automatic",
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorScheme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PreferenceError::UnknownScheme(other.to_string())),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredPreferences {
    #[serde(rename = "colorScheme", default, skip_serializing_if = "Option::is_none")]
    color_scheme: Option<ColorScheme>,
}

/// JSON file holding the saved scheme
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store backed by `path`
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saved scheme, [`ColorScheme::Auto`] when nothing is saved
    ///
    /// # Errors
    ///
    /// [`PreferenceError::Io`] if the file exists but cannot be read,
    /// [`PreferenceError::Corrupt`] if it does not decode.
    pub fn load(&self) -> Result<ColorScheme, PreferenceError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(ColorScheme::Auto),
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        let stored: StoredPreferences =
            serde_json::from_str(&text).map_err(|source| PreferenceError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        Ok(stored.color_scheme.unwrap_or_default())
    }

    /// Persist `scheme`
    ///
    /// # Errors
    ///
    /// [`PreferenceError::Io`] if the file or its directory cannot be written.
    pub fn save(&self, scheme: ColorScheme) -> Result<(), PreferenceError> {
        let io_err = |source| PreferenceError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let stored = StoredPreferences {
            color_scheme: Some(scheme),
        };
        let body = serde_json::to_string_pretty(&stored).map_err(|source| PreferenceError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, body).map_err(io_err)?;
        tracing::info!(scheme = %scheme, "color scheme changed");
        Ok(())
    }
}
