//! Projector plumbing shared by every variant
//!
//! A projector is built once per stage: it resolves its narrowed schema at
//! construction and holds nothing mutable, so one instance can serve any
//! number of worker threads. Variants differ only in where their source
//! lives inside the response and in the per-item record function.

use crate::error::Result;
use crate::record::{assemble, Record};
use ocular_schema::{require_element_record, require_record, RecordSchema, SchemaError};
use ocular_vision::AnnotateResponse;
use serde_json::Value;

/// A configured projector for one annotation variant
pub trait Projector: Send + Sync {
    /// The designated output field name
    fn output_field(&self) -> &str;

    /// The stage's full output schema
    fn output_schema(&self) -> &RecordSchema;

    /// Project the variant's annotation out of the response
    fn annotation(&self, response: &AnnotateResponse) -> Result<Value>;

    /// Project one record: route embedded upstream errors, project the
    /// annotation, and assemble the output record
    fn project(&self, input: &Record, response: &AnnotateResponse) -> Result<Record> {
        if let Some(status) = &response.error {
            return Err(crate::error::ProjectError::Upstream(
                status.message_or_default().to_string(),
            ));
        }
        let value = self.annotation(response)?;
        Ok(assemble(input, self.output_field(), value, self.output_schema()))
    }
}

impl std::fmt::Debug for dyn Projector + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Projector")
            .field("output_field", &self.output_field())
            .finish()
    }
}

/// Projector for list-shaped variants (faces, labels, crop hints, ...)
///
/// Projects each source item through `item` using the element record
/// schema resolved once at construction.
#[derive(Debug)]
pub struct ListProjector<T: 'static> {
    field: String,
    full: RecordSchema,
    element: RecordSchema,
    items: fn(&AnnotateResponse) -> &[T],
    item: fn(&T, &RecordSchema) -> Result<Record>,
}

impl<T> ListProjector<T> {
    /// Resolve the narrowed element schema and build the projector
    pub fn new(
        output_field: &str,
        schema: &RecordSchema,
        items: fn(&AnnotateResponse) -> &[T],
        item: fn(&T, &RecordSchema) -> Result<Record>,
    ) -> std::result::Result<Self, SchemaError> {
        let field_schema = schema
            .field(output_field)
            .ok_or_else(|| SchemaError::MissingOutputField(output_field.to_string()))?;
        let element = require_element_record(field_schema, output_field)?.clone();
        Ok(Self {
            field: output_field.to_string(),
            full: schema.clone(),
            element,
            items,
            item,
        })
    }
}

impl<T: Sync> Projector for ListProjector<T> {
    fn output_field(&self) -> &str {
        &self.field
    }

    fn output_schema(&self) -> &RecordSchema {
        &self.full
    }

    fn annotation(&self, response: &AnnotateResponse) -> Result<Value> {
        let items = (self.items)(response);
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            out.push(Value::Object((self.item)(item, &self.element)?));
        }
        Ok(Value::Array(out))
    }
}

/// Projector for single-record variants (safe search, web detection,
/// product search, full-document text)
///
/// An absent source projects to null.
pub struct RecordProjector<T: 'static> {
    field: String,
    full: RecordSchema,
    narrowed: RecordSchema,
    source: for<'a> fn(&'a AnnotateResponse) -> Option<&'a T>,
    build: fn(&T, &RecordSchema) -> Result<Record>,
}

impl<T> RecordProjector<T> {
    /// Resolve the narrowed record schema and build the projector
    pub fn new(
        output_field: &str,
        schema: &RecordSchema,
        source: for<'a> fn(&'a AnnotateResponse) -> Option<&'a T>,
        build: fn(&T, &RecordSchema) -> Result<Record>,
    ) -> std::result::Result<Self, SchemaError> {
        let field_schema = schema
            .field(output_field)
            .ok_or_else(|| SchemaError::MissingOutputField(output_field.to_string()))?;
        let narrowed = require_record(field_schema, output_field)?.clone();
        Ok(Self {
            field: output_field.to_string(),
            full: schema.clone(),
            narrowed,
            source,
            build,
        })
    }
}

impl<T: Sync> Projector for RecordProjector<T> {
    fn output_field(&self) -> &str {
        &self.field
    }

    fn output_schema(&self) -> &RecordSchema {
        &self.full
    }

    fn annotation(&self, response: &AnnotateResponse) -> Result<Value> {
        match (self.source)(response) {
            Some(source) => Ok(Value::Object((self.build)(source, &self.narrowed)?)),
            None => Ok(Value::Null),
        }
    }
}
