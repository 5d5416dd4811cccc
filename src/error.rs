//! Error types for Pixabay API operations
//!
//! This module defines error types that can occur when searching Pixabay
//! and downloading result images, including transport failures, decode
//! errors, and invalid caller input.

use thiserror::Error;

/// Errors that can occur when talking to the Pixabay API
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP request could not be sent or the response body read
    #[error("pixabay request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status code
    #[error("pixabay returned HTTP {status}: {snippet}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Leading portion of the response body
        snippet: String,
    },

    /// The response body was not valid JSON or was missing required fields
    #[error("failed to decode pixabay response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A positional lookup was outside the result set
    #[error("index {index} out of range, valid range is 0..{len}")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// Number of hits in the result set
        len: usize,
    },

    /// An attribute lookup named a field the hit does not have
    #[error("unknown attribute '{name}', available attributes: {}", .available.join(", "))]
    UnknownAttribute {
        /// The requested attribute name
        name: String,
        /// Every attribute the hit exposes
        available: Vec<String>,
    },

    /// A size token was not one of the recognized variants
    #[error("invalid size '{given}', expected one of: default, preview, web, large")]
    InvalidSize {
        /// The rejected token
        given: String,
    },

    /// A random download was requested on a result set with no hits
    #[error("result set is empty, nothing to download")]
    EmptyResultSet,

    /// An image file could not be written to disk
    #[error("failed to write image file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Pixabay operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_reports_valid_range() {
        let err = Error::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range, valid range is 0..3");
    }

    #[test]
    fn unknown_attribute_lists_available_fields() {
        let err = Error::UnknownAttribute {
            name: "bogus".to_string(),
            available: vec!["id".to_string(), "user".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'bogus'"));
        assert!(msg.contains("id, user"));
    }

    #[test]
    fn invalid_size_names_accepted_set() {
        let err = Error::InvalidSize {
            given: "huge".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("default"));
        assert!(msg.contains("preview"));
        assert!(msg.contains("web"));
        assert!(msg.contains("large"));
    }
}
