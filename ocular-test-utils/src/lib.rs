//! Ocular Test Utilities
//!
//! Shared fixtures and helpers for the ocular workspace tests: canned
//! annotation responses, a record builder, and proptest strategies for
//! structural schema subsets.

use serde_json::{Map, Value};

pub mod fixtures;
pub mod subsets;

/// Builder for input records used in projection tests
pub struct RecordBuilder {
    fields: Map<String, Value>,
}

impl RecordBuilder {
    /// Create a new record builder
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Add a field with a string value
    pub fn string(mut self, key: &str, value: &str) -> Self {
        self.fields
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Add a field with a float value
    pub fn float(mut self, key: &str, value: f64) -> Self {
        self.fields.insert(key.to_string(), Value::from(value));
        self
    }

    /// Add a field with a null value
    pub fn null(mut self, key: &str) -> Self {
        self.fields.insert(key.to_string(), Value::Null);
        self
    }

    /// Add a field with an arbitrary JSON value
    pub fn value(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// Build the record
    pub fn build(self) -> Map<String, Value> {
        self.fields
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The usual one-field input record: `{path: "..."}`
pub fn path_record(path: &str) -> Map<String, Value> {
    RecordBuilder::new().string("path", path).build()
}
