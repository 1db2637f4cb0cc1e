//! Flat view of classifier parameter bags.
//!
//! The classifier reports parameters either as plain JSON
//! (`{"full_name": "Asha"}`) or in protobuf `Struct` form
//! (`{"fields": {"full_name": {"stringValue": "Asha"}}}`), depending on the
//! client that produced them. Both are flattened here into one map of
//! trimmed, non-empty strings.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Trimmed, non-empty string parameters keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slots(BTreeMap<String, String>);

impl Slots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens a parameter bag in either wire shape.
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let entries = match object.get("fields").and_then(Value::as_object) {
            Some(fields) => fields,
            None => object,
        };

        Self::from_object(entries)
    }

    fn from_object(entries: &Map<String, Value>) -> Self {
        let mut slots = Self::default();
        for (key, value) in entries {
            if let Some(text) = scalar_text(value) {
                slots.insert(key, text);
            }
        }
        slots
    }

    /// Inserts a value, ignoring blanks.
    pub fn insert(&mut self, key: impl Into<String>, value: impl AsRef<str>) {
        let value = value.as_ref().trim();
        if !value.is_empty() {
            self.0.insert(key.into(), value.to_string());
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// First present value among several keys.
    pub fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key))
    }

    /// Plain-JSON form, as sent back to the classifier.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        )
    }
}

/// Extracts a displayable string from a parameter value.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(inner) => {
            // Struct value wrapper or @sys.person entity
            if let Some(s) = inner.get("stringValue").and_then(Value::as_str) {
                return Some(s.to_string());
            }
            if let Some(n) = inner.get("numberValue").and_then(Value::as_f64) {
                return Some(format_number(n));
            }
            inner
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string)
        }
        _ => None,
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
