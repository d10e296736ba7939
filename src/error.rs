//! Error types for the review pipeline.

use std::path::{Path, PathBuf};

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for review operations
pub type Result<T> = std::result::Result<T, ReviewError>;

/// Failures that abort a review run
#[derive(Debug, Error)]
pub enum ReviewError {
    /// File could not be read or written
    #[error("I/O error on '{}'", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Binary document could not be parsed as its declared format
    #[error("'{}' is not a readable PDF: {message}", .path.display())]
    Format { path: PathBuf, message: String },

    /// Model service answered with a non-success status
    #[error("{service} error: {status} - {body}")]
    Service {
        service: String,
        status: StatusCode,
        body: String,
    },

    /// Model service answered 2xx but the envelope was not the expected one
    #[error("unexpected {service} response: {message}")]
    ResponseShape { service: String, message: String },

    /// Request never got a response (connection fault, timeout)
    #[error("{service} request failed")]
    Transport {
        service: String,
        source: reqwest::Error,
    },

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ReviewError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn format(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    pub fn response_shape(service: &str, message: impl Into<String>) -> Self {
        Self::ResponseShape {
            service: service.to_string(),
            message: message.into(),
        }
    }

    /// The request URL is dropped from `source`; it can carry credentials.
    pub fn transport(service: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            service: service.to_string(),
            source: source.without_url(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
