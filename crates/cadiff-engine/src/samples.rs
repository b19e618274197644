//! Built-in sample designs for self-test mode.
//!
//! The pair exercises every kind of positional outcome: two vstrands swap
//! places, one has a staple edited in place, and one is appended.

use cadiff_core::{Document, Record, Value};

fn cells(values: &[[i64; 4]]) -> Value {
    Value::Seq(
        values
            .iter()
            .map(|cell| Value::Seq(cell.iter().map(|v| Value::Int(*v)).collect()))
            .collect(),
    )
}

fn vstrand(num: i64, row: i64, col: i64, stap: &[[i64; 4]]) -> Record {
    Record::from_pairs([
        ("num", Value::Int(num)),
        ("row", Value::Int(row)),
        ("col", Value::Int(col)),
        ("scaf", cells(&[[-1, -1, -1, -1], [-1, -1, -1, -1]])),
        ("stap", cells(stap)),
        ("loop", Value::Seq(vec![Value::Int(0), Value::Int(0)])),
        ("skip", Value::Seq(vec![Value::Int(0), Value::Int(0)])),
        ("stap_colors", Value::Seq(Vec::new())),
    ])
}

const EMPTY: [[i64; 4]; 2] = [[-1, -1, -1, -1], [-1, -1, -1, -1]];

/// The old and new sample designs.
pub fn sample_pair() -> (Document, Document) {
    let old = Document::new(
        "sample_design.json",
        vec![
            vstrand(0, 0, 0, &EMPTY),
            vstrand(1, 0, 1, &EMPTY),
            vstrand(2, 1, 1, &EMPTY),
        ],
    );
    let new = Document::new(
        "sample_design_v2.json",
        vec![
            vstrand(1, 0, 1, &EMPTY),
            vstrand(0, 0, 0, &EMPTY),
            vstrand(2, 1, 1, &[[-1, -1, 2, 1], [2, 0, -1, -1]]),
            vstrand(3, 1, 0, &EMPTY),
        ],
    );
    (old, new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_differ() {
        let (old, new) = sample_pair();
        assert_ne!(old.name, new.name);
        assert_eq!(old.records.len(), 3);
        assert_eq!(new.records.len(), 4);
    }
}
