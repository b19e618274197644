//! Design diff engine.
//!
//! Compares two parsed designs and produces a structured, deterministic diff
//! plus a human-readable report.
//!
//! ## Entry point
//!
//! ```
//! use cadiff_core::diff::{compare_documents, render_report, ReportOptions};
//! use cadiff_core::model::{Document, Record, Value};
//!
//! let old = Document::new("design", vec![Record::from_pairs([("num", Value::Int(0))])]);
//! let new = Document::new("design", vec![Record::from_pairs([("num", Value::Int(1))])]);
//! let diff = compare_documents(&old, &new).unwrap();
//! let lines = render_report(&diff, &ReportOptions::default());
//! assert_eq!(lines[0], "1 vstrands added");
//! ```
//!
//! ## Pipeline
//!
//! canonicalize → classify (sets) → compare (positions) → diff_fields
//! (modified indices) → report.

pub mod canonical;
pub mod classify;
pub mod engine;
pub mod fields;
pub mod model;
pub mod positional;
pub mod report;

pub use canonical::{
    canonicalize, canonicalize_record, canonicalize_records, CanonicalRecord, CanonicalValue,
};
pub use classify::{classify, Classification};
pub use engine::{compare_documents, compare_documents_with, CompareOptions};
pub use fields::diff_fields;
pub use model::DesignDiff;
pub use positional::{compare, pairwise_change_count};
pub use report::{render_report, render_report_text, ReportOptions};
