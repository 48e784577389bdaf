//! Error types for Folio operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Folio crates. Uses `thiserror` for derive macros.

use thiserror::Error;

/// Errors that can occur in Folio operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A remote or local resource could not be fetched.
    #[error("Failed to fetch {location}: {message}")]
    Fetch {
        /// URL or path that was requested
        location: String,
        /// What went wrong
        message: String,
    },

    /// The syntax highlighting engine rejected the input.
    #[error("Highlight error: {0}")]
    Highlight(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create a fetch error for the given location.
    pub fn fetch(location: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Fetch {
            location: location.into(),
            message: msg.into(),
        }
    }

    /// Create a highlight error.
    pub fn highlight(msg: impl Into<String>) -> Self {
        Self::Highlight(msg.into())
    }

    /// Returns whether this error is a transient fetch failure.
    ///
    /// Transient failures are recovered with fallback data or a reported
    /// failure signal; they are never fatal to rendering.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Fetch { .. } => true,
            Error::Config(_) => false,
            Error::NotFound(_) => false,
            Error::InvalidData(_) => false,
            Error::Serialization(_) => false,
            Error::Highlight(_) => false,
        }
    }

    /// Returns whether this error means the requested content does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Result type alias using Folio's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::not_found("article 7").to_string(),
            "Not found: article 7"
        );
        assert_eq!(
            Error::fetch("/articles/1.md", "status 404").to_string(),
            "Failed to fetch /articles/1.md: status 404"
        );
        assert_eq!(
            Error::config("bad theme").to_string(),
            "Configuration error: bad theme"
        );
    }

    #[test]
    fn test_error_is_transient() {
        assert!(Error::fetch("x", "timeout").is_transient());
        assert!(Error::Io(std::io::Error::other("disk")).is_transient());
        assert!(!Error::not_found("x").is_transient());
        assert!(!Error::invalid_data("x").is_transient());
        assert!(!Error::highlight("x").is_transient());
    }

    #[test]
    fn test_error_is_not_found() {
        assert!(Error::not_found("x").is_not_found());
        assert!(!Error::serialization("x").is_not_found());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
