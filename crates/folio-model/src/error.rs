//! Error types for the project model

/// Errors raised while decoding or validating project records
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The document is not valid JSON or not an array
    #[error("malformed project document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// One record could not be read as a project; the rest still load
    #[error("project at index {index} skipped: {source}")]
    InvalidRecord {
        /// Position of the record in source order
        index: usize,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_record_display() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = ModelError::InvalidRecord { index: 4, source };
        assert!(err.to_string().starts_with("project at index 4 skipped: "));
    }

    #[test]
    fn malformed_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ModelError::from(serde_err);
        assert!(err.to_string().starts_with("malformed project document"));
    }
}
