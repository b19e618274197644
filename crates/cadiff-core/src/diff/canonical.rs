//! Canonical (hashable, ordered) images of design values.
//!
//! Sequences keep their element order, so `[a, b]` and `[b, a]` stay
//! different. Mappings become `(key, value)` pairs sorted by key, so two
//! mappings with the same content compare equal whatever their insertion
//! order. Every canonical value is `Eq + Hash + Ord` and can live in sets.

use crate::errors::{CadiffError, ExError, Result};
use crate::model::{Record, Value};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::fmt;

/// Bit pattern of a finite `f64`, with `-0.0` folded into `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FloatKey(u64);

impl FloatKey {
    /// `None` for NaN and infinities, which have no usable equality.
    pub fn new(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let value = if value == 0.0 { 0.0 } else { value };
        Some(Self(value.to_bits()))
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.0)
    }
}

/// Immutable, hashable image of a [`Value`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(FloatKey),
    String(String),
    Seq(Vec<CanonicalValue>),
    /// Pairs sorted by key, keys unique
    Map(Vec<(String, CanonicalValue)>),
}

impl CanonicalValue {
    /// Map back to a plain [`Value`] (mapping keys come out sorted).
    pub fn to_value(&self) -> Value {
        match self {
            CanonicalValue::Null => Value::Null,
            CanonicalValue::Bool(b) => Value::Bool(*b),
            CanonicalValue::Int(i) => Value::Int(*i),
            CanonicalValue::UInt(u) => Value::UInt(*u),
            CanonicalValue::Float(f) => Value::Float(f.get()),
            CanonicalValue::String(s) => Value::String(s.clone()),
            CanonicalValue::Seq(items) => Value::Seq(items.iter().map(Self::to_value).collect()),
            CanonicalValue::Map(pairs) => Value::Map(
                pairs
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_value()))
                    .collect(),
            ),
        }
    }
}

impl Serialize for CanonicalValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CanonicalValue::Null => serializer.serialize_unit(),
            CanonicalValue::Bool(b) => serializer.serialize_bool(*b),
            CanonicalValue::Int(i) => serializer.serialize_i64(*i),
            CanonicalValue::UInt(u) => serializer.serialize_u64(*u),
            CanonicalValue::Float(f) => serializer.serialize_f64(f.get()),
            CanonicalValue::String(s) => serializer.serialize_str(s),
            CanonicalValue::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            CanonicalValue::Map(pairs) => {
                let mut map = serializer.serialize_map(Some(pairs.len()))?;
                for (k, v) in pairs {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

/// Compact JSON rendering, used in report lines.
impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

/// Canonical image of a [`Record`]: fields sorted by name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalRecord(CanonicalValue);

impl CanonicalRecord {
    /// Sorted `(field, value)` pairs
    pub fn fields(&self) -> &[(String, CanonicalValue)] {
        match &self.0 {
            CanonicalValue::Map(pairs) => pairs,
            _ => &[],
        }
    }

    pub fn get(&self, field: &str) -> Option<&CanonicalValue> {
        let fields = self.fields();
        fields
            .binary_search_by(|(k, _)| k.as_str().cmp(field))
            .ok()
            .map(|i| &fields[i].1)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields().iter().map(|(k, _)| k.as_str())
    }

    pub fn as_value(&self) -> &CanonicalValue {
        &self.0
    }
}

/// Why canonicalization stopped, plus the path walked back out of the value.
struct Fault {
    reason: FaultReason,
    segments: Vec<String>,
}

enum FaultReason {
    Unhashable(String),
    DuplicateKey(String),
}

impl Fault {
    fn new(reason: FaultReason) -> Self {
        Self {
            reason,
            segments: Vec::new(),
        }
    }

    fn at(mut self, segment: String) -> Self {
        self.segments.push(segment);
        self
    }

    fn into_error(self, root: &str) -> ExError {
        let mut path = root.to_string();
        for segment in self.segments.iter().rev() {
            path.push_str(segment);
        }
        let err = match self.reason {
            FaultReason::Unhashable(value) => CadiffError::UnhashableValue { path, value },
            FaultReason::DuplicateKey(key) => CadiffError::DuplicateKey { path, key },
        };
        err.into()
    }
}

fn canonical_value(value: &Value) -> std::result::Result<CanonicalValue, Fault> {
    Ok(match value {
        Value::Null => CanonicalValue::Null,
        Value::Bool(b) => CanonicalValue::Bool(*b),
        Value::Int(i) => CanonicalValue::Int(*i),
        Value::UInt(u) => CanonicalValue::UInt(*u),
        Value::Float(f) => match FloatKey::new(*f) {
            Some(key) => CanonicalValue::Float(key),
            None => return Err(Fault::new(FaultReason::Unhashable(f.to_string()))),
        },
        Value::String(s) => CanonicalValue::String(s.clone()),
        Value::Seq(items) => CanonicalValue::Seq(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| canonical_value(item).map_err(|f| f.at(format!("[{}]", i))))
                .collect::<std::result::Result<_, _>>()?,
        ),
        Value::Map(pairs) => CanonicalValue::Map(canonical_pairs(pairs)?),
    })
}

fn canonical_pairs(
    pairs: &[(String, Value)],
) -> std::result::Result<Vec<(String, CanonicalValue)>, Fault> {
    let mut out = pairs
        .iter()
        .map(|(k, v)| {
            canonical_value(v)
                .map(|cv| (k.clone(), cv))
                .map_err(|f| f.at(format!(".{}", k)))
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;
    out.sort_by(|a, b| a.0.cmp(&b.0));
    if let Some(w) = out.windows(2).find(|w| w[0].0 == w[1].0) {
        return Err(Fault::new(FaultReason::DuplicateKey(w[0].0.clone())));
    }
    Ok(out)
}

/// Canonicalize a single value.
///
/// # Errors
///
/// - `UnhashableValue` - a float is NaN or infinite
/// - `InvalidInput` - a mapping repeats a key
pub fn canonicalize(value: &Value) -> Result<CanonicalValue> {
    canonical_value(value).map_err(|f| f.into_error("$"))
}

/// Canonicalize one record. `label` names the record in error paths.
///
/// # Errors
///
/// Same as [`canonicalize`].
pub fn canonicalize_record(record: &Record, label: &str) -> Result<CanonicalRecord> {
    canonical_pairs(record.fields())
        .map(|pairs| CanonicalRecord(CanonicalValue::Map(pairs)))
        .map_err(|f| f.into_error(label))
}

/// Canonicalize a record sequence, preserving its order.
///
/// Errors name the failing record as `<label>[<index>]` followed by the
/// path inside it, e.g. `vstrands[3].stap[2][1]`.
///
/// # Errors
///
/// Same as [`canonicalize`]; the first failing record aborts.
pub fn canonicalize_records(records: &[Record], label: &str) -> Result<Vec<CanonicalRecord>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            canonicalize_record(record, &format!("{}[{}]", label, i)).map_err(|e| e.with_index(i))
        })
        .collect()
}
