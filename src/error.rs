//! Error types for the log colorizer
//!
//! Classification itself is total and never fails. Errors only arise in the
//! surrounding I/O layer: opening input, reading configuration, writing to
//! the terminal.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for colorizer operations
#[derive(Error, Debug)]
pub enum ColorizerError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file could not be opened
    #[error("File '{}' couldn't be read: {source}", path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A palette entry names a color the terminal layer does not know
    #[error("Invalid color '{value}' for palette entry '{key}'")]
    InvalidColor { key: &'static str, value: String },

    /// Effective configuration could not be rendered as TOML
    #[error("Serialization error: {0}")]
    Serialization(#[from] toml::ser::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for colorizer operations
pub type Result<T> = std::result::Result<T, ColorizerError>;

impl From<anyhow::Error> for ColorizerError {
    fn from(err: anyhow::Error) -> Self {
        ColorizerError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ColorizerError::InvalidColor {
            key: "error",
            value: "blurple".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid color 'blurple' for palette entry 'error'"
        );
    }

    #[test]
    fn test_input_open_names_file() {
        let err = ColorizerError::InputOpen {
            path: PathBuf::from("server.log"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().starts_with("File 'server.log' couldn't be read"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ColorizerError = io_err.into();
        assert!(matches!(err, ColorizerError::Io(_)));

        let err: ColorizerError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
