use cadiff_core::{Document, Record, Value};

/// Build a design from a JSON array of record objects
#[allow(dead_code)]
pub fn design(name: &str, records: serde_json::Value) -> Document {
    let Value::Seq(items) = Value::from(records) else {
        panic!("records fixture must be a JSON array");
    };
    let records = items
        .into_iter()
        .map(|item| match item {
            Value::Map(pairs) => Record::from(pairs),
            other => panic!("record fixture must be an object, got {}", other.type_name()),
        })
        .collect();
    Document::new(name, records)
}

/// A minimal vstrand record with one scaffold and one staple cell
#[allow(dead_code)]
pub fn vstrand(num: i64, row: i64, col: i64) -> serde_json::Value {
    serde_json::json!({
        "num": num,
        "row": row,
        "col": col,
        "scaf": [[-1, -1, -1, -1]],
        "stap": [[-1, -1, -1, -1]],
        "loop": [0],
        "skip": [0],
        "stap_colors": [],
    })
}
