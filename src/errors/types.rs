//! Error type definitions for the texture admin service
//!
//! This module defines all error types used throughout the application,
//! providing a hierarchical error system that makes debugging and error
//! handling more straightforward.

use thiserror::Error;

/// Top-level application error type
///
/// This enum represents all possible errors that can occur in the application.
/// It uses `thiserror` to provide automatic error trait implementations and
/// proper error chaining.
#[derive(Error, Debug)]
pub enum AppError {
    /// Local validation failures, rejected before any network call
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Upstream fetch failures (enumeration, metadata read, metadata write)
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Cache tier failures (durable tier I/O or serialization)
    #[error("Cache error: {namespace} - {message}")]
    Cache { namespace: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while fetching data from upstream collaborators
#[derive(Error, Debug)]
pub enum FetchError {
    /// Texture enumeration failures
    #[error("Enumeration failed: {path} - {message}")]
    Enumeration { path: String, message: String },

    /// Metadata store read endpoint returned a non-success status
    #[error("Metadata read rejected: HTTP {status}")]
    ReadRejected { status: u16 },

    /// Metadata store write endpoint returned a non-success status
    #[error("Metadata write rejected: HTTP {status}")]
    WriteRejected { status: u16 },

    /// Transport-level HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience methods for creating common error types
impl AppError {
    /// Create a validation error with a custom message
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a cache error for a specific cache namespace
    pub fn cache<N: Into<String>, M: Into<String>>(namespace: N, message: M) -> Self {
        Self::Cache {
            namespace: namespace.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl FetchError {
    /// Create an enumeration error
    pub fn enumeration<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::Enumeration {
            path: path.into(),
            message: message.into(),
        }
    }
}
