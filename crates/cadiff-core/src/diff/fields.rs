//! Field-level comparison of two records found at the same index.

use crate::diff::canonical::CanonicalRecord;
use crate::diff::model::{FieldComparison, FieldDiff, KeyMismatch};

/// Compare two records field by field in sorted key order.
///
/// The first position where the field names disagree (or where one record
/// runs out of fields) is reported as a [`KeyMismatch`] and ends the
/// comparison for this pair; diffs found before it are kept.
pub fn diff_fields(old: &CanonicalRecord, new: &CanonicalRecord) -> FieldComparison {
    let old_fields = old.fields();
    let new_fields = new.fields();
    let mut comparison = FieldComparison::default();

    for position in 0..old_fields.len().max(new_fields.len()) {
        match (old_fields.get(position), new_fields.get(position)) {
            (Some((old_key, old_value)), Some((new_key, new_value))) if old_key == new_key => {
                if old_value != new_value {
                    comparison.diffs.push(FieldDiff {
                        field: old_key.clone(),
                        old: old_value.clone(),
                        new: new_value.clone(),
                    });
                }
            }
            (o, n) => {
                comparison.key_mismatch = Some(KeyMismatch {
                    position,
                    old_key: o.map(|(k, _)| k.clone()),
                    new_key: n.map(|(k, _)| k.clone()),
                });
                break;
            }
        }
    }

    comparison
}
