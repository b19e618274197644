//! Error handling for cadiff-store
//!
//! Wraps cadiff-core ExError with store-specific helpers

use cadiff_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error, mapping a missing file to `NotFound`
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    if err.kind() == std::io::ErrorKind::NotFound {
        return not_found(operation, path);
    }
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

/// Create a not-found error for a source or config file
pub fn not_found(operation: &str, path: &Path) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op(operation.to_string())
        .with_path(path.display().to_string())
        .with_message("file does not exist")
}

/// Create an invalid document error
pub fn invalid_document(reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidDocument)
        .with_op("parse_document")
        .with_message(reason)
}

/// Create a missing field error
pub fn missing_field(field: &str) -> ExError {
    ExError::new(ExErrorKind::MissingField)
        .with_op("parse_document")
        .with_message(format!("required field `{}` is absent", field))
}

/// Create an invalid config error
pub fn invalid_config(reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::InvalidConfig)
        .with_op("load_config")
        .with_message(reason)
}

/// Create an invalid pattern error
pub fn invalid_pattern(pattern: &str, err: globset::Error) -> ExError {
    ExError::new(ExErrorKind::InvalidPattern)
        .with_op("resolve_sources")
        .with_path(pattern.to_string())
        .with_message(err.to_string())
}
