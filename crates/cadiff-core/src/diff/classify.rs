//! Set-level classification of records into added, removed and common.

use crate::diff::canonical::CanonicalRecord;
use crate::diff::model::SetCounts;
use std::collections::BTreeSet;

/// Set partition of `old ∪ new` by canonical equality.
///
/// Duplicate records within one side collapse to a single element, so the
/// counts describe distinct records, not occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Classification {
    /// In new, not in old
    pub added: BTreeSet<CanonicalRecord>,
    /// In old, not in new
    pub removed: BTreeSet<CanonicalRecord>,
    /// In both
    pub common: BTreeSet<CanonicalRecord>,
}

impl Classification {
    pub fn counts(&self) -> SetCounts {
        SetCounts {
            added: self.added.len(),
            removed: self.removed.len(),
            common: self.common.len(),
        }
    }

    pub fn is_common(&self, record: &CanonicalRecord) -> bool {
        self.common.contains(record)
    }
}

/// Classify two record sequences.
pub fn classify(old: &[CanonicalRecord], new: &[CanonicalRecord]) -> Classification {
    let old_set: BTreeSet<&CanonicalRecord> = old.iter().collect();
    let new_set: BTreeSet<&CanonicalRecord> = new.iter().collect();

    Classification {
        added: new_set.difference(&old_set).map(|r| (*r).clone()).collect(),
        removed: old_set.difference(&new_set).map(|r| (*r).clone()).collect(),
        common: old_set.intersection(&new_set).map(|r| (*r).clone()).collect(),
    }
}
