use serde_json::Value;

use crate::error::{Error, Result};

/// Parsed tour payload. Kept as a generic JSON tree; fields are only checked
/// when they are looked up.
#[derive(Debug, Clone, PartialEq)]
pub struct TourDocument(Value);

impl TourDocument {
    pub fn new(value: Value) -> Self {
        TourDocument(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Follows `path` through nested objects. The error names the first
    /// segment that is missing.
    pub fn lookup(&self, path: &[&str]) -> Result<&Value> {
        let mut node = &self.0;
        for (depth, key) in path.iter().enumerate() {
            node = node.get(*key).ok_or_else(|| Error::SchemaMismatch {
                path: path[..=depth].join("."),
                expected: "a value",
            })?;
        }
        Ok(node)
    }

    pub fn str_at(&self, path: &[&str]) -> Result<&str> {
        self.lookup(path)?
            .as_str()
            .ok_or_else(|| mismatch(path, "a string"))
    }

    pub fn array_at(&self, path: &[&str]) -> Result<&[Value]> {
        self.lookup(path)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| mismatch(path, "an array"))
    }
}

impl From<Value> for TourDocument {
    fn from(value: Value) -> Self {
        TourDocument(value)
    }
}

fn mismatch(path: &[&str], expected: &'static str) -> Error {
    Error::SchemaMismatch {
        path: path.join("."),
        expected,
    }
}
