//! Error handling module for the clext CLI.
//!
//! Scanning itself cannot fail; every error here comes from getting the
//! source text, reading configuration, or writing the report.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the clext CLI application.
#[derive(Error, Debug)]
pub enum ClextError {
    /// Configuration file missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The source file could not be opened or read.
    #[error("Unable to open source file '{}'", .path.display())]
    SourceUnreadable {
        /// Path as given by the user.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// No source path was given and none could be read from stdin.
    #[error("No source file path provided")]
    MissingPath,

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ClextError.
pub type Result<T> = std::result::Result<T, ClextError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ClextError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_source_unreadable_display() {
        let err = ClextError::SourceUnreadable {
            path: PathBuf::from("prog.c"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "Unable to open source file 'prog.c'");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_missing_path_display() {
        assert_eq!(ClextError::MissingPath.to_string(), "No source file path provided");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ClextError = io_err.into();
        assert!(matches!(err, ClextError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ClextError = json_err.into();
        assert!(matches!(err, ClextError::Json(_)));
    }
}
