//! Proptest strategies for structural schema subsets
//!
//! A subset keeps the reference schema's shape but may drop any field at
//! any nesting depth. Generation draws one keep/drop decision per field,
//! consumed in pre-order, so the decision vector has a fixed length for a
//! given reference schema and shrinks cleanly.

use ocular_schema::{Field, RecordSchema, Schema};
use proptest::prelude::*;

/// Strategy producing structural subsets of a record schema
pub fn subset_record(record: &RecordSchema) -> BoxedStrategy<RecordSchema> {
    let reference = record.clone();
    let decisions = record_decisions(&reference);
    prop::collection::vec(any::<bool>(), decisions)
        .prop_map(move |bits| build_record(&reference, &mut bits.into_iter()))
        .boxed()
}

/// Strategy producing structural subsets of any schema
pub fn subset_schema(schema: &Schema) -> BoxedStrategy<Schema> {
    let reference = schema.clone();
    let decisions = schema_decisions(&reference);
    prop::collection::vec(any::<bool>(), decisions)
        .prop_map(move |bits| build_schema(&reference, &mut bits.into_iter()))
        .boxed()
}

// One decision per field, everywhere in the tree.
fn schema_decisions(schema: &Schema) -> usize {
    match schema {
        Schema::Nullable(inner) | Schema::Array(inner) => schema_decisions(inner),
        Schema::Record(record) => record_decisions(record),
        _ => 0,
    }
}

fn record_decisions(record: &RecordSchema) -> usize {
    record
        .fields()
        .iter()
        .map(|field| 1 + schema_decisions(&field.schema))
        .sum()
}

fn build_schema(reference: &Schema, bits: &mut impl Iterator<Item = bool>) -> Schema {
    match reference {
        Schema::Nullable(inner) => Schema::nullable(build_schema(inner, bits)),
        Schema::Array(element) => Schema::array(build_schema(element, bits)),
        Schema::Record(record) => Schema::Record(build_record(record, bits)),
        primitive => primitive.clone(),
    }
}

// Decisions are consumed for dropped fields too, keeping the pre-order
// alignment independent of earlier choices.
fn build_record(reference: &RecordSchema, bits: &mut impl Iterator<Item = bool>) -> RecordSchema {
    let mut fields = Vec::new();
    for field in reference.fields() {
        let keep = bits.next().unwrap_or(true);
        let schema = build_schema(&field.schema, bits);
        if keep {
            fields.push(Field::new(field.name.clone(), schema));
        }
    }
    RecordSchema::new(reference.name(), fields)
}
