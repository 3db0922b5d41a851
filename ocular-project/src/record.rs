//! Record building primitives
//!
//! The one rule the whole engine hangs on: a field is set iff the supplied
//! schema resolves it. Requested fields are always present in the output
//! (null or empty list when the source has no value); unrequested fields
//! are never inserted.

use crate::error::{ProjectError, Result};
use ocular_schema::{element_record, RecordSchema, Schema};
use ocular_vision::Likelihood;
use serde_json::{Map, Value};

/// A projected record under construction
pub type Record = Map<String, Value>;

/// Set a field iff the schema requests it
///
/// When `schema.field(name)` resolves, `f` is called with the unwrapped
/// (non-nullable) field schema and its value is inserted under `name`.
/// Otherwise nothing happens.
pub fn set_if_requested<F>(out: &mut Record, schema: &RecordSchema, name: &str, f: F) -> Result<()>
where
    F: FnOnce(&Schema) -> Result<Value>,
{
    if let Some(field_schema) = schema.field(name) {
        let value = f(field_schema.unwrap_nullable())?;
        out.insert(name.to_string(), value);
    }
    Ok(())
}

/// Project a source list through a per-item record function
///
/// `field_schema` must be a (possibly nullable) array of records; each item
/// is projected with the element record schema. Empty source lists yield
/// empty arrays, preserving count and order otherwise.
pub fn project_list<T, F>(items: &[T], field_schema: &Schema, field: &str, f: F) -> Result<Value>
where
    F: Fn(&T, &RecordSchema) -> Result<Record>,
{
    let element = element_record(field_schema).ok_or_else(|| ProjectError::Shape {
        field: field.to_string(),
        expected: "an array of records",
    })?;
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(Value::Object(f(item, element)?));
    }
    Ok(Value::Array(out))
}

/// Project an optional nested record, null when the source is absent
pub fn project_nested<T, F>(
    source: Option<&T>,
    field_schema: &Schema,
    field: &str,
    f: F,
) -> Result<Value>
where
    F: Fn(&T, &RecordSchema) -> Result<Record>,
{
    let record = field_schema
        .unwrap_nullable()
        .as_record()
        .ok_or_else(|| ProjectError::Shape {
            field: field.to_string(),
            expected: "a record",
        })?;
    match source {
        Some(value) => Ok(Value::Object(f(value, record)?)),
        None => Ok(Value::Null),
    }
}

/// A float value, null when absent or non-finite
pub fn float(value: Option<f64>) -> Value {
    value.map(Value::from).unwrap_or(Value::Null)
}

/// An integer value, null when absent
pub fn integer(value: Option<i64>) -> Value {
    value.map(Value::from).unwrap_or(Value::Null)
}

/// A string value, null when absent
pub fn string(value: Option<&str>) -> Value {
    value
        .map(|s| Value::String(s.to_string()))
        .unwrap_or(Value::Null)
}

/// A likelihood bucket name, null when absent
pub fn likelihood(value: Option<Likelihood>) -> Value {
    value
        .map(|l| Value::String(l.as_str().to_string()))
        .unwrap_or(Value::Null)
}

/// Assemble the stage output record
///
/// Copies every input field declared in the full output schema, then sets
/// `output_field` to the projected value, overwriting any same-named input
/// field. The result's field set never exceeds the schema's top level.
pub fn assemble(
    input: &Record,
    output_field: &str,
    value: Value,
    schema: &RecordSchema,
) -> Record {
    let mut out = Record::new();
    for field in schema.fields() {
        if field.name == output_field {
            continue;
        }
        if let Some(existing) = input.get(&field.name) {
            out.insert(field.name.clone(), existing.clone());
        }
    }
    out.insert(output_field.to_string(), value);
    out
}
