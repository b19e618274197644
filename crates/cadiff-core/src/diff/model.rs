//! Design diff output types.
//!
//! All types implement `Debug, Clone, Serialize, PartialEq`. Everything is
//! ordered by record index or by canonical order, so serialization is
//! deterministic.

use crate::diff::canonical::{CanonicalRecord, CanonicalValue};
use serde::Serialize;

/// The top-level structured diff between two designs.
///
/// `diff_schema_version` is always 1 for this implementation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DesignDiff {
    /// Schema version of this diff structure (always 1)
    pub diff_schema_version: u32,
    /// Names and record digests of both sides
    pub identity: DiffIdentity,
    /// Whether the record sequences are identical
    pub classification: DiffClassification,
    /// Present when the design name changed
    pub name_change: Option<NameChange>,
    /// Set-level counts (zero when identical)
    pub set_counts: SetCounts,
    /// Number of indices whose outcome is not `Unchanged`
    pub pairwise_change_count: usize,
    /// One entry per index that is not `Unchanged`, in index order
    pub changes: Vec<IndexedOutcome>,
    /// Field-level diffs for every `Modified` index, in index order
    pub record_changes: Vec<RecordChange>,
    /// Recovered schema violations
    pub anomalies: Vec<Anomaly>,
}

impl DesignDiff {
    pub fn is_identical(&self) -> bool {
        self.classification == DiffClassification::Identical
    }

    /// Field comparison for a modified index, if any
    pub fn record_change(&self, index: usize) -> Option<&RecordChange> {
        self.record_changes.iter().find(|c| c.index == index)
    }
}

/// Names, lengths and digests of both designs.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DiffIdentity {
    pub old_name: String,
    pub new_name: String,
    pub old_record_count: usize,
    pub new_record_count: usize,
    /// SHA-256 of the old canonical record sequence
    pub old_records_digest: String,
    /// SHA-256 of the new canonical record sequence
    pub new_records_digest: String,
}

/// High-level classification of the diff result.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum DiffClassification {
    /// Record sequences are canonically identical, order included
    Identical,
    /// At least one record differs or moved
    Changed,
}

/// Old and new design names.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NameChange {
    pub old: String,
    pub new: String,
}

/// Sizes of the added / removed / common sets.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct SetCounts {
    pub added: usize,
    pub removed: usize,
    pub common: usize,
}

/// Which side still has an element at an extended index.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Side {
    /// Only the old design has a record here: the sequence shrank
    OldOnly,
    /// Only the new design has a record here: the sequence grew
    NewOnly,
}

/// What happened at one index.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind")]
pub enum PositionalOutcome {
    Unchanged,
    Extended {
        side: Side,
    },
    /// The old record at this index reappears unchanged at `to_index` in new
    Moved {
        to_index: usize,
    },
    Modified {
        old_record: CanonicalRecord,
        new_record: CanonicalRecord,
    },
}

/// A positional outcome tagged with its index.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IndexedOutcome {
    pub index: usize,
    pub outcome: PositionalOutcome,
}

/// One changed field.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldDiff {
    pub field: String,
    pub old: CanonicalValue,
    pub new: CanonicalValue,
}

/// Field-name sequences disagree at `position` (in sorted key order).
///
/// A `None` key means that record ran out of fields first.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KeyMismatch {
    pub position: usize,
    pub old_key: Option<String>,
    pub new_key: Option<String>,
}

/// Result of comparing two records field by field.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct FieldComparison {
    pub diffs: Vec<FieldDiff>,
    pub key_mismatch: Option<KeyMismatch>,
}

/// Field comparison attached to a modified index.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecordChange {
    pub index: usize,
    /// Value of the identity field in the old record (new record as fallback)
    pub record_id: Option<CanonicalValue>,
    pub fields: FieldComparison,
}

/// A non-fatal schema violation found while diffing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind")]
pub enum Anomaly {
    KeyMismatch { index: usize, mismatch: KeyMismatch },
}
