//! Design diff computation engine.
//!
//! The core entry point is [`compare_documents`], which accepts two parsed
//! designs and produces a [`DesignDiff`]. It is a pure function: no I/O, no
//! logging, no global state.

use crate::diff::canonical::{canonicalize_records, CanonicalRecord};
use crate::diff::classify::classify;
use crate::diff::fields::diff_fields;
use crate::diff::model::{
    Anomaly, DesignDiff, DiffClassification, DiffIdentity, IndexedOutcome, NameChange,
    PositionalOutcome, RecordChange, SetCounts,
};
use crate::diff::positional::{compare, pairwise_change_count};
use crate::errors::{CadiffError, Result};
use crate::model::Document;
use sha2::{Digest as _, Sha256};
use std::collections::BTreeSet;

/// Options that affect naming only; comparison semantics never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    /// Label for the record sequence in error paths (`vstrands[3].stap`)
    pub records_label: String,
    /// Field used to identify a record in the report
    pub id_field: String,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            records_label: "vstrands".to_string(),
            id_field: "num".to_string(),
        }
    }
}

/// SHA-256 over the JSON encoding of a canonical record sequence.
fn records_digest(records: &[CanonicalRecord]) -> Result<String> {
    let bytes = serde_json::to_vec(records).map_err(|e| CadiffError::Serialization {
        message: format!("cannot encode canonical records: {}", e),
    })?;
    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    Ok(hex::encode(hasher.finalize()))
}

/// Compare two designs with default options.
///
/// # Errors
///
/// See [`compare_documents_with`].
pub fn compare_documents(old: &Document, new: &Document) -> Result<DesignDiff> {
    compare_documents_with(old, new, &CompareOptions::default())
}

/// Compare two designs.
///
/// # Errors
///
/// - `UnhashableValue` - a record holds a NaN or infinite float
/// - `InvalidInput` - a record or nested mapping repeats a key
///
/// Key mismatches between modified records are not errors; they are
/// returned in [`DesignDiff::anomalies`].
pub fn compare_documents_with(
    old: &Document,
    new: &Document,
    options: &CompareOptions,
) -> Result<DesignDiff> {
    let old_records = canonicalize_records(&old.records, &options.records_label)
        .map_err(|e| e.with_op("canonicalize_old"))?;
    let new_records = canonicalize_records(&new.records, &options.records_label)
        .map_err(|e| e.with_op("canonicalize_new"))?;

    let identity = DiffIdentity {
        old_name: old.name.clone(),
        new_name: new.name.clone(),
        old_record_count: old_records.len(),
        new_record_count: new_records.len(),
        old_records_digest: records_digest(&old_records)?,
        new_records_digest: records_digest(&new_records)?,
    };

    let name_change = (old.name != new.name).then(|| NameChange {
        old: old.name.clone(),
        new: new.name.clone(),
    });

    // Fast-path: identical record sequences, order included
    if old_records == new_records {
        let common = old_records.iter().collect::<BTreeSet<_>>().len();
        return Ok(DesignDiff {
            diff_schema_version: 1,
            identity,
            classification: DiffClassification::Identical,
            name_change,
            set_counts: SetCounts {
                added: 0,
                removed: 0,
                common,
            },
            pairwise_change_count: 0,
            changes: Vec::new(),
            record_changes: Vec::new(),
            anomalies: Vec::new(),
        });
    }

    let classification = classify(&old_records, &new_records);
    let outcomes = compare(&old_records, &new_records, &classification);
    let pairwise = pairwise_change_count(&outcomes);

    let mut record_changes = Vec::new();
    let mut anomalies = Vec::new();
    for IndexedOutcome { index, outcome } in &outcomes {
        if let PositionalOutcome::Modified {
            old_record,
            new_record,
        } = outcome
        {
            let fields = diff_fields(old_record, new_record);
            if let Some(mismatch) = &fields.key_mismatch {
                anomalies.push(Anomaly::KeyMismatch {
                    index: *index,
                    mismatch: mismatch.clone(),
                });
            }
            record_changes.push(RecordChange {
                index: *index,
                record_id: old_record
                    .get(&options.id_field)
                    .or_else(|| new_record.get(&options.id_field))
                    .cloned(),
                fields,
            });
        }
    }

    let changes = outcomes
        .into_iter()
        .filter(|o| o.outcome != PositionalOutcome::Unchanged)
        .collect();

    Ok(DesignDiff {
        diff_schema_version: 1,
        identity,
        classification: DiffClassification::Changed,
        name_change,
        set_counts: classification.counts(),
        pairwise_change_count: pairwise,
        changes,
        record_changes,
        anomalies,
    })
}
