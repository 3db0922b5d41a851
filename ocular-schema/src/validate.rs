//! Configured-schema validation
//!
//! Runs once at stage configuration. Compares the configured output
//! schema's output-field subtree against the feature's inferred full shape,
//! field by field. Failures are fatal to configuration and carry the
//! dotted path of the offending field.

use crate::error::{Result, SchemaError};
use crate::feature::Feature;
use crate::infer::annotation_schema;
use crate::schema::{RecordSchema, Schema};

/// Validate a configured output schema against a feature's full shape
///
/// The configured schema must declare `output_field`, and that field's
/// subtree must be a structural subset of the inferred shape: no unknown
/// fields, no primitive-kind conflicts, and nothing declared non-nullable
/// where the full shape allows null.
pub fn validate_output_schema(
    configured: &RecordSchema,
    feature: Feature,
    output_field: &str,
) -> Result<()> {
    let declared = configured
        .field(output_field)
        .ok_or_else(|| SchemaError::MissingOutputField(output_field.to_string()))?;
    let inferred = annotation_schema(feature);
    check(declared, &inferred, output_field)
}

fn check(configured: &Schema, inferred: &Schema, path: &str) -> Result<()> {
    // The full shape is nullable everywhere; a non-nullable declaration
    // promises a value the service may not deliver.
    if inferred.is_nullable() && !configured.is_nullable() {
        return Err(SchemaError::Mismatch {
            field: path.to_string(),
            expected: format!("nullable {}", inferred.unwrap_nullable().type_name()),
            found: configured.type_name().to_string(),
        });
    }
    let configured = configured.unwrap_nullable();
    let inferred = inferred.unwrap_nullable();

    match (configured, inferred) {
        (Schema::Array(c), Schema::Array(i)) => check(c, i, path),
        (Schema::Record(c), Schema::Record(i)) => check_record(c, i, path),
        (c, i) if c == i => Ok(()),
        (c, i) => Err(SchemaError::Mismatch {
            field: path.to_string(),
            expected: i.type_name().to_string(),
            found: c.type_name().to_string(),
        }),
    }
}

fn check_record(configured: &RecordSchema, inferred: &RecordSchema, path: &str) -> Result<()> {
    for field in configured.fields() {
        let child_path = format!("{}.{}", path, field.name);
        match inferred.field(&field.name) {
            Some(expected) => check(&field.schema, expected, &child_path)?,
            None => return Err(SchemaError::UnknownField(child_path)),
        }
    }
    Ok(())
}
