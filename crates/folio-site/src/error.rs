//! Error types for the site layer
//!
//! Covers:
//! - Fetching JSON documents (files and HTTP)
//! - Loading site configuration
//! - Reading and writing the colour-scheme preference

use std::path::PathBuf;

/// Main site error type
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Fetch failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Preference store failed
    #[error("preference error: {0}")]
    Preference(#[from] PreferenceError),
}

/// Errors fetching or decoding a JSON document
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Server answered with a non-success status
    #[error("failed to fetch {location}: {status}")]
    Status {
        /// URL requested
        location: String,
        /// Status line, e.g. `404 Not Found`
        status: String,
    },

    /// Connection, TLS or body read failure
    #[error("transport error for {location}: {source}")]
    Transport {
        /// URL requested
        location: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// Local file could not be read
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Body is not the expected JSON shape
    #[error("error parsing JSON from {location}: {source}")]
    Parse {
        /// Where the body came from
        location: String,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },

    /// Body is JSON but not a project list
    #[error("invalid project data from {location}: {source}")]
    Model {
        /// Where the body came from
        location: String,
        /// Validation error
        #[source]
        source: folio_model::ModelError,
    },
}

impl FetchError {
    /// Check if the failure came from the network rather than the payload
    #[inline]
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Transport { .. })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File exists but could not be read
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        /// Config path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for [`crate::SiteConfig`]
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        /// Config path
        path: PathBuf,
        /// Decoder error
        #[source]
        source: toml::de::Error,
    },

    /// A value is out of range
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        /// Offending field
        field: &'static str,
        /// Why it was rejected
        reason: String,
    },
}

/// Preference store errors
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    /// Store could not be read or written
    #[error("preference store {}: {source}", .path.display())]
    Io {
        /// Store path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Store content is not valid
    #[error("corrupt preference store {}: {source}", .path.display())]
    Corrupt {
        /// Store path
        path: PathBuf,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },

    /// Unknown colour scheme name
    #[error("unknown color scheme '{0}' (expected auto, light or dark)")]
    UnknownScheme(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_display() {
        let err = FetchError::Status {
            location: "lib/projects.json".into(),
            status: "404 Not Found".into(),
        };
        assert_eq!(err.to_string(), "failed to fetch lib/projects.json: 404 Not Found");
        assert!(err.is_network());
    }

    #[test]
    fn io_error_is_not_network() {
        let err = FetchError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "nope"),
        };
        assert!(!err.is_network());
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn site_error_wraps_preference() {
        let err: SiteError = PreferenceError::UnknownScheme("sepia".into()).into();
        assert!(err.to_string().contains("sepia"));
    }
}
