//! Human-readable report renderer for design diffs.
//!
//! Pure formatting over a [`DesignDiff`]; every decision was already made
//! by the engine. Line order:
//! 1. name change (if any)
//! 2. "identical" line, and nothing else, when the record sequences match
//! 3. added / removed / common counts
//! 4. pairwise changes, one line per changed index, field lines under
//!    each modified index

use crate::diff::canonical::CanonicalValue;
use crate::diff::model::{DesignDiff, KeyMismatch, PositionalOutcome, RecordChange, Side};

/// Wording options for the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// What a record is called (`vstrand`)
    pub noun: String,
    /// Name of the identity field shown next to modified records
    pub id_field: String,
    /// Append `: <old> -> <new>` to each changed-field line
    pub show_values: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            noun: "vstrand".to_string(),
            id_field: "num".to_string(),
            show_values: false,
        }
    }
}

fn display_id(id: Option<&CanonicalValue>) -> String {
    id.map(|v| v.to_string()).unwrap_or_else(|| "?".to_string())
}

fn key_mismatch_line(noun: &str, index: usize, mismatch: &KeyMismatch) -> String {
    format!(
        "  {} {} change in keys '{}' != '{}' - this should not happen!!",
        noun,
        index,
        mismatch.old_key.as_deref().unwrap_or("<none>"),
        mismatch.new_key.as_deref().unwrap_or("<none>"),
    )
}

fn modified_lines(change: &RecordChange, options: &ReportOptions, out: &mut Vec<String>) {
    let noun = &options.noun;
    let id = display_id(change.record_id.as_ref());
    out.push(format!(
        "{} {} ({} {}) modified:",
        noun, change.index, options.id_field, id
    ));
    for diff in &change.fields.diffs {
        let mut line = format!(
            "  '{}' is changed in {} {} (index {})",
            diff.field, noun, id, change.index
        );
        if options.show_values {
            line.push_str(&format!(": {} -> {}", diff.old, diff.new));
        }
        out.push(line);
    }
    if let Some(mismatch) = &change.fields.key_mismatch {
        out.push(key_mismatch_line(noun, change.index, mismatch));
    }
}

/// Render the report as ordered lines.
pub fn render_report(diff: &DesignDiff, options: &ReportOptions) -> Vec<String> {
    let noun = &options.noun;
    let mut out = Vec::new();

    if let Some(name_change) = &diff.name_change {
        out.push(format!(
            "New name: {} -> {}",
            name_change.old, name_change.new
        ));
    }

    if diff.is_identical() {
        out.push(format!("The two designs share the exact same {}s.", noun));
        return out;
    }

    let counts = diff.set_counts;
    out.push(format!("{} {}s added", counts.added, noun));
    out.push(format!("{} {}s removed", counts.removed, noun));
    out.push(format!(
        "{} {}s in common (although could be shuffled around)",
        counts.common, noun
    ));

    if diff.pairwise_change_count == 0 {
        return out;
    }

    out.push(format!(
        "{} pair-wise changes in {}s.",
        diff.pairwise_change_count, noun
    ));
    out.push("Pairwise changes:".to_string());

    for change in &diff.changes {
        let i = change.index;
        match &change.outcome {
            PositionalOutcome::Unchanged => {}
            PositionalOutcome::Extended {
                side: Side::NewOnly,
            } => out.push(format!("extended {} {} new {} added.", noun, i, noun)),
            PositionalOutcome::Extended {
                side: Side::OldOnly,
            } => out.push(format!("extended {} {} old {} removed.", noun, i, noun)),
            PositionalOutcome::Moved { to_index } => out.push(format!(
                "old {} {} moved to {} (but is otherwise identical)",
                noun, i, to_index
            )),
            PositionalOutcome::Modified { .. } => match diff.record_change(i) {
                Some(record_change) => modified_lines(record_change, options, &mut out),
                None => out.push(format!("{} {} modified", noun, i)),
            },
        }
    }

    out
}

/// Render the report as newline-terminated text.
pub fn render_report_text(diff: &DesignDiff, options: &ReportOptions) -> String {
    let mut text = render_report(diff, options).join("\n");
    text.push('\n');
    text
}
