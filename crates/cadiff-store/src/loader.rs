//! Design document loader
//!
//! Reads a cadnano JSON file and builds a [`Document`]: the top-level
//! `name` plus the record array (`vstrands` by default). Record field order
//! is kept as written in the file.

#![allow(clippy::result_large_err)]

use crate::errors::{invalid_document, io_error, missing_field, Result};
use cadiff_core::model::{Document, Record, Value};
use std::fs;
use std::path::Path;

/// Loader options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Top-level key holding the record array
    pub records_key: String,
    /// Load a document without `name` as an empty name instead of failing
    pub allow_missing_name: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            records_key: "vstrands".to_string(),
            allow_missing_name: false,
        }
    }
}

/// Load a design document from a path
///
/// # Errors
///
/// - `NotFound` - the file does not exist
/// - `Io` - the file exists but cannot be read
/// - `InvalidDocument` / `MissingField` - see [`parse_document`]
pub fn load_document(path: &Path, options: &LoaderOptions) -> Result<Document> {
    let bytes = fs::read(path).map_err(|e| io_error("load_document", path, e))?;
    let content = String::from_utf8(bytes).map_err(|e| {
        invalid_document(format!("not valid UTF-8: {}", e))
            .with_path(path.display().to_string())
    })?;

    let document =
        parse_document(&content, options).map_err(|e| e.with_path(path.display().to_string()))?;

    tracing::debug!(
        path = %path.display(),
        name = %document.name,
        records = document.records.len(),
        "Loaded design document"
    );

    Ok(document)
}

/// Parse a design document from a JSON string
///
/// # Errors
///
/// - `InvalidDocument` - malformed JSON, a root that is not an object, a
///   non-string `name`, or a record list that is not an array of objects
/// - `MissingField` - `name` (unless allowed) or the record list is absent
pub fn parse_document(content: &str, options: &LoaderOptions) -> Result<Document> {
    let root: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| invalid_document(format!("JSON parse error: {}", e)))?;

    let serde_json::Value::Object(mut root) = root else {
        return Err(invalid_document("document root must be a JSON object"));
    };

    let name = match root.remove("name") {
        Some(serde_json::Value::String(name)) => name,
        Some(other) => {
            return Err(invalid_document(format!(
                "`name` must be a string, found {}",
                json_type_name(&other)
            )))
        }
        None if options.allow_missing_name => String::new(),
        None => return Err(missing_field("name")),
    };

    let key = options.records_key.as_str();
    let items = match root.remove(key) {
        Some(serde_json::Value::Array(items)) => items,
        Some(other) => {
            return Err(invalid_document(format!(
                "`{}` must be an array, found {}",
                key,
                json_type_name(&other)
            )))
        }
        None => return Err(missing_field(key)),
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match Value::from(item) {
            Value::Map(pairs) => Ok(Record::from(pairs)),
            other => Err(invalid_document(format!(
                "`{}[{}]` must be an object, found {}",
                key,
                index,
                other.type_name()
            ))
            .with_index(index)),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Document::new(name, records))
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
