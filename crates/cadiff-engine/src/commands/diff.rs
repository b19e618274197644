//! Design diff command with boundary logging.
//!
//! ## Pipeline (in order):
//! 1. Two-source precondition (hard stop, nothing is read)
//! 2. Load both documents
//! 3. Compare (pure, in `cadiff-core`)
//! 4. Render report lines
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for diff operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store) use only `tracing::debug!()` for internal details;
//! the core does not log.

#![allow(clippy::result_large_err)]

use crate::samples::sample_pair;
use cadiff_core::diff::model::Anomaly;
use cadiff_core::diff::{compare_documents_with, render_report, CompareOptions};
use cadiff_core::errors::{CadiffError, ExError, ExErrorKind};
use cadiff_core::{log_op_end, log_op_error, log_op_start, DesignDiff, Document, ReportOptions};
use cadiff_store::errors::Result;
use cadiff_store::{load_document, LoaderOptions};
use std::path::{Path, PathBuf};

/// Options for a diff run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    /// Top-level key holding the record array (`vstrands`)
    pub records_key: String,
    /// Field naming a record in the report (`num`)
    pub id_field: String,
    /// Print old and new values of changed fields
    pub show_values: bool,
    /// Accept documents without a `name`
    pub allow_missing_name: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            records_key: "vstrands".to_string(),
            id_field: "num".to_string(),
            show_values: false,
            allow_missing_name: false,
        }
    }
}

impl DiffOptions {
    /// Singular record noun used in report lines: `vstrands` → `vstrand`
    pub fn noun(&self) -> &str {
        self.records_key
            .strip_suffix('s')
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.records_key)
    }

    fn loader_options(&self) -> LoaderOptions {
        LoaderOptions {
            records_key: self.records_key.clone(),
            allow_missing_name: self.allow_missing_name,
        }
    }

    fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            records_label: self.records_key.clone(),
            id_field: self.id_field.clone(),
        }
    }

    fn report_options(&self) -> ReportOptions {
        ReportOptions {
            noun: self.noun().to_string(),
            id_field: self.id_field.clone(),
            show_values: self.show_values,
        }
    }
}

/// Result of a diff run.
#[derive(Debug, Clone)]
pub struct DiffOutcome {
    /// Label of the old design (its path, or the sample name)
    pub old_source: String,
    /// Label of the new design
    pub new_source: String,
    /// The structured diff
    pub diff: DesignDiff,
    /// Rendered report lines
    pub lines: Vec<String>,
}

/// Compare the two design files named by `sources`.
///
/// ## Errors
///
/// - `SourceCount`: `sources` does not hold exactly two paths
/// - `NotFound` / `Io` / `InvalidDocument` / `MissingField`: loading failed
/// - `UnhashableValue` / `InvalidInput`: a design holds a value that
///   cannot be compared
pub fn diff_sources(sources: &[PathBuf], options: &DiffOptions) -> Result<DiffOutcome> {
    log_op_start!("diff_sources", source_count = sources.len());
    let start = std::time::Instant::now();

    let outcome = diff_sources_impl(sources, options).map_err(|e| {
        log_op_error!(
            "diff_sources",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "diff_sources",
        duration_ms = start.elapsed().as_millis() as u64,
        pairwise_changes = outcome.diff.pairwise_change_count,
        identical = outcome.diff.is_identical()
    );

    Ok(outcome)
}

fn diff_sources_impl(sources: &[PathBuf], options: &DiffOptions) -> Result<DiffOutcome> {
    let [old_path, new_path] = sources else {
        return Err(CadiffError::SourceCount {
            count: sources.len(),
            paths: sources.iter().map(|p| p.display().to_string()).collect(),
        }
        .into());
    };

    let loader = options.loader_options();
    let old = load_document(old_path, &loader)?;
    let new = load_document(new_path, &loader)?;

    let (diff, lines) = diff_documents(&old, &new, options)?;

    Ok(DiffOutcome {
        old_source: source_label(old_path),
        new_source: source_label(new_path),
        diff,
        lines,
    })
}

fn source_label(path: &Path) -> String {
    path.display().to_string()
}

/// Compare two already-loaded documents and render the report.
///
/// ## Errors
///
/// Same as [`compare_documents_with`].
pub fn diff_documents(
    old: &Document,
    new: &Document,
    options: &DiffOptions,
) -> Result<(DesignDiff, Vec<String>)> {
    let diff = compare_documents_with(old, new, &options.compare_options())?;

    for anomaly in &diff.anomalies {
        let Anomaly::KeyMismatch { index, mismatch } = anomaly;
        tracing::warn!(
            index,
            old_key = mismatch.old_key.as_deref().unwrap_or("<none>"),
            new_key = mismatch.new_key.as_deref().unwrap_or("<none>"),
            "Record field names differ between designs"
        );
    }

    let lines = render_report(&diff, &options.report_options());
    Ok((diff, lines))
}

/// Compare the built-in sample designs.
///
/// ## Errors
///
/// Only on an internal failure; the samples are well-formed.
pub fn run_self_test(options: &DiffOptions) -> Result<DiffOutcome> {
    log_op_start!("self_test");
    let start = std::time::Instant::now();

    let (old, new) = sample_pair();
    let result = diff_documents(&old, &new, options)
        .map(|(diff, lines)| DiffOutcome {
            old_source: old.name.clone(),
            new_source: new.name.clone(),
            diff,
            lines,
        })
        .map_err(|e| {
            log_op_error!(
                "self_test",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "self_test",
        duration_ms = start.elapsed().as_millis() as u64,
        pairwise_changes = result.diff.pairwise_change_count
    );

    Ok(result)
}

/// Serialize a diff as pretty JSON.
///
/// ## Errors
///
/// - `Serialization`: encoding failed
pub fn render_json(diff: &DesignDiff) -> Result<String> {
    serde_json::to_string_pretty(diff).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("render_json")
            .with_message(format!("Failed to serialize diff: {}", e))
    })
}
