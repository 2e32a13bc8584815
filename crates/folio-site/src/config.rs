//! Site configuration
//!
//! Read from a TOML file. Every key is optional; missing keys take the
//! defaults below.
//!
//! ```toml
//! github_username = "AncientAbacus"
//! projects_source = "lib/projects.json"
//! placeholder_image = "images/place_holder.jpeg"
//! featured_count = 3
//! api_base = "https://api.github.com"
//! preference_path = ".folio/preferences.json"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Site-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// GitHub account shown on the home and meta pages
    pub github_username: String,
    /// File path or `http(s)` URL of `projects.json`
    pub projects_source: String,
    /// Image used when a featured project has none
    pub placeholder_image: String,
    /// Number of featured projects on the home page
    pub featured_count: usize,
    /// GitHub REST API root
    pub api_base: String,
    /// Where the colour-scheme preference is stored
    pub preference_path: PathBuf,
}

impl SiteConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `path`; a missing file yields the defaults
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] when the file exists but cannot be read,
    /// [`ConfigError::Parse`] when it is not valid TOML for this shape,
    /// [`ConfigError::Invalid`] when a value is out of range.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.github_username.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "github_username",
                reason: "must not be empty".into(),
            });
        }
        if self.projects_source.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "projects_source",
                reason: "must not be empty".into(),
            });
        }
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(ConfigError::Invalid {
                field: "api_base",
                reason: format!("'{}' is not an http(s) URL", self.api_base),
            });
        }
        Ok(())
    }

    /// With GitHub username
    #[inline]
    #[must_use]
    pub fn with_github_username(mut self, username: impl Into<String>) -> Self {
        self.github_username = username.into();
        self
    }

    /// With projects source
    #[inline]
    #[must_use]
    pub fn with_projects_source(mut self, source: impl Into<String>) -> Self {
        self.projects_source = source.into();
        self
    }

    /// With API base
    #[inline]
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// With preference path
    #[inline]
    #[must_use]
    pub fn with_preference_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.preference_path = path.into();
        self
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            github_username: "AncientAbacus".into(),
            projects_source: "lib/projects.json".into(),
            placeholder_image: "images/place_holder.jpeg".into(),
            featured_count: 3,
            api_base: "https://api.github.com".into(),
            preference_path: PathBuf::from(".folio/preferences.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load(&dir.path().join("folio.toml")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_file_overrides_some_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "github_username = \"octocat\"\nfeatured_count = 5").unwrap();
        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.github_username, "octocat");
        assert_eq!(config.featured_count, 5);
        assert_eq!(config.projects_source, "lib/projects.json");
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "featured_count = \"three\"").unwrap();
        let err = SiteConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn rejects_non_http_api_base() {
        let config = SiteConfig::new().with_api_base("ftp://example.org");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "api_base", .. }));
    }

    #[test]
    fn rejects_empty_username() {
        let config = SiteConfig::new().with_github_username("  ");
        assert!(config.validate().is_err());
    }
}
