//! Error types for the pipelint core library
//!
//! Validation outcomes are never errors: they are returned as
//! [`FormErrors`](crate::FormErrors) data. This module only covers the
//! fallible edges of the library, such as parsing configuration documents
//! and loading message tables.

use thiserror::Error;

/// Main error type for pipelint core operations
#[derive(Error, Debug)]
pub enum Error {
    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing and serialization errors
    #[error("YAML error: {message}")]
    Yaml {
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// A document parsed but does not have the expected shape
    #[error("Invalid document: {message}")]
    InvalidDocument {
        message: String,
        expected: Option<String>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid document error
    pub fn invalid_document(message: impl Into<String>, expected: Option<&str>) -> Self {
        Error::InvalidDocument {
            message: message.into(),
            expected: expected.map(str::to_string),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}
