//! Index-aligned comparison of two record sequences.
//!
//! Per index, in priority order:
//! 1. one side has no record → `Extended`
//! 2. records canonically equal → `Unchanged`
//! 3. old record is in the common set → `Moved` to its first index in new
//! 4. otherwise → `Modified`
//!
//! A record that moved and was also edited is reported as `Modified`.

use crate::diff::canonical::CanonicalRecord;
use crate::diff::classify::Classification;
use crate::diff::model::{IndexedOutcome, PositionalOutcome, Side};
use std::collections::HashMap;

/// Compare two sequences index by index over `[0, max(len(old), len(new)))`.
///
/// Returns one outcome per index, `Unchanged` included.
pub fn compare(
    old: &[CanonicalRecord],
    new: &[CanonicalRecord],
    classification: &Classification,
) -> Vec<IndexedOutcome> {
    let mut first_index_in_new: HashMap<&CanonicalRecord, usize> = HashMap::new();
    for (i, record) in new.iter().enumerate() {
        first_index_in_new.entry(record).or_insert(i);
    }

    let len = old.len().max(new.len());
    (0..len)
        .map(|index| {
            let outcome = match (old.get(index), new.get(index)) {
                (Some(_), None) => PositionalOutcome::Extended {
                    side: Side::OldOnly,
                },
                (None, _) => PositionalOutcome::Extended {
                    side: Side::NewOnly,
                },
                (Some(o), Some(n)) if o == n => PositionalOutcome::Unchanged,
                (Some(o), Some(n)) => match classification
                    .is_common(o)
                    .then(|| first_index_in_new.get(o))
                    .flatten()
                {
                    Some(&to_index) => PositionalOutcome::Moved { to_index },
                    None => PositionalOutcome::Modified {
                        old_record: o.clone(),
                        new_record: n.clone(),
                    },
                },
            };
            IndexedOutcome { index, outcome }
        })
        .collect()
}

/// Number of outcomes that are not `Unchanged`.
pub fn pairwise_change_count(outcomes: &[IndexedOutcome]) -> usize {
    outcomes
        .iter()
        .filter(|o| o.outcome != PositionalOutcome::Unchanged)
        .count()
}
