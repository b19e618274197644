//! cadiff Core - comparison engine for cadnano design documents
//!
//! This crate provides:
//! - The design data model (`Document`, `Record`, `Value`)
//! - Canonicalization of nested values into hashable, ordered form
//! - Set classification, positional comparison and field comparison
//! - The structured `DesignDiff` and its human-readable report
//! - The error facility (`ExError`) and the logging facility shared by the
//!   other workspace crates
//!
//! The comparison itself is pure: no I/O, no logging, no global state.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;

#[doc(hidden)]
pub use cadiff_core_types as core_types;

// Re-export commonly used types
pub use diff::{compare_documents, render_report, DesignDiff, ReportOptions};
pub use errors::{CadiffError, ExError, ExErrorKind, Result};
pub use model::{Document, Record, Value};
