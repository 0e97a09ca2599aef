//! Error types for mobius.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`MobiusError`].
pub type Result<T> = std::result::Result<T, MobiusError>;

/// Errors that can occur while building, measuring or rendering a surface.
#[derive(Error, Debug)]
pub enum MobiusError {
    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },

    /// Coordinate grids do not describe a triangulable surface.
    #[error("grid shape mismatch: expected {expected:?}, found {found:?}")]
    GridShape {
        /// Shape every grid must have.
        expected: (usize, usize),
        /// Shape that was supplied.
        found: (usize, usize),
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error saving a mesh to file.
    #[error("failed to save mesh to {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },
}

impl MobiusError {
    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MobiusError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_message_names_value() {
        let err = MobiusError::invalid_param("n", 1, "resolution must be at least 2");
        assert_eq!(
            err.to_string(),
            "invalid parameter: n = 1 (resolution must be at least 2)"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: MobiusError = io.into();
        assert!(matches!(err, MobiusError::Io(_)));
    }
}
