//! Output schema model and navigation helpers
//!
//! The schema describes exactly which fields, at every nesting level, the
//! projected record must contain. Navigation always operates on a
//! caller-supplied schema: a field that was not requested resolves to
//! `None`, never to an error.

use crate::error::{Result, SchemaError};

/// An output schema node
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// Boolean primitive
    Boolean,
    /// 32-bit integer primitive
    Int,
    /// 64-bit integer primitive
    Long,
    /// 32-bit float primitive
    Float,
    /// 64-bit float primitive
    Double,
    /// UTF-8 string primitive
    String,
    /// Ordered list with a single element schema
    Array(Box<Schema>),
    /// Named record with ordered fields
    Record(RecordSchema),
    /// Union of null and the wrapped schema
    Nullable(Box<Schema>),
}

/// A named record schema with ordered fields
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    name: String,
    fields: Vec<Field>,
}

/// A single field declaration inside a record schema
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name
    pub name: String,
    /// Declared schema of the field
    pub schema: Schema,
}

impl Field {
    /// Create a field declaration
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
        }
    }
}

impl Schema {
    /// Wrap a schema in a nullable union
    pub fn nullable(schema: Schema) -> Schema {
        Schema::Nullable(Box::new(schema))
    }

    /// Build an array schema over an element schema
    pub fn array(element: Schema) -> Schema {
        Schema::Array(Box::new(element))
    }

    /// Build a record schema from name and fields
    pub fn record(name: impl Into<String>, fields: Vec<Field>) -> Schema {
        Schema::Record(RecordSchema::new(name, fields))
    }

    /// Strip at most one nullable wrapper
    pub fn unwrap_nullable(&self) -> &Schema {
        match self {
            Schema::Nullable(inner) => inner,
            other => other,
        }
    }

    /// Element schema of an array, or `None` for non-arrays
    pub fn element(&self) -> Option<&Schema> {
        match self {
            Schema::Array(element) => Some(element),
            _ => None,
        }
    }

    /// View as a record schema, or `None` for non-records
    pub fn as_record(&self) -> Option<&RecordSchema> {
        match self {
            Schema::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Whether this schema is a nullable union
    pub fn is_nullable(&self) -> bool {
        matches!(self, Schema::Nullable(_))
    }

    /// Short name of the schema kind, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Schema::Boolean => "boolean",
            Schema::Int => "int",
            Schema::Long => "long",
            Schema::Float => "float",
            Schema::Double => "double",
            Schema::String => "string",
            Schema::Array(_) => "array",
            Schema::Record(_) => "record",
            Schema::Nullable(_) => "nullable",
        }
    }
}

impl RecordSchema {
    /// Create a record schema from name and fields
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Record name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields, in declaration order
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Resolve a field's declared schema by name
    ///
    /// `None` means the field was not requested. Callers must treat that as
    /// "do not populate", not as a failure.
    pub fn field(&self, name: &str) -> Option<&Schema> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.schema)
    }

    /// Whether a field is declared
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

/// Element record schema of a list-of-records field
///
/// Unwraps, in order: nullable wrapper, array element, element's nullable
/// wrapper, record. `None` when the field schema has any other shape.
pub fn element_record(field_schema: &Schema) -> Option<&RecordSchema> {
    field_schema
        .unwrap_nullable()
        .element()
        .map(Schema::unwrap_nullable)
        .and_then(Schema::as_record)
}

/// Element record schema, or a shape error naming the field
///
/// Used at construction time where a list-of-records field is required.
pub fn require_element_record<'a>(field_schema: &'a Schema, field: &str) -> Result<&'a RecordSchema> {
    element_record(field_schema).ok_or_else(|| SchemaError::BadOutputField {
        field: field.to_string(),
        expected: "an array of records".to_string(),
    })
}

/// Record schema of a record-valued field, or a shape error naming the field
pub fn require_record<'a>(field_schema: &'a Schema, field: &str) -> Result<&'a RecordSchema> {
    field_schema
        .unwrap_nullable()
        .as_record()
        .ok_or_else(|| SchemaError::BadOutputField {
            field: field.to_string(),
            expected: "a record".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point() -> RecordSchema {
        RecordSchema::new(
            "Point",
            vec![
                Field::new("x", Schema::nullable(Schema::Double)),
                Field::new("y", Schema::nullable(Schema::Double)),
            ],
        )
    }

    #[test]
    fn test_field_resolution() {
        let record = point();
        assert!(record.field("x").is_some());
        assert!(record.field("z").is_none());
        assert!(record.has_field("y"));
    }

    #[test]
    fn test_unwrap_nullable() {
        let schema = Schema::nullable(Schema::String);
        assert_eq!(schema.unwrap_nullable(), &Schema::String);
        // Non-nullable schemas unwrap to themselves
        assert_eq!(Schema::Long.unwrap_nullable(), &Schema::Long);
    }

    #[test]
    fn test_element_schema() {
        let schema = Schema::array(Schema::String);
        assert_eq!(schema.element(), Some(&Schema::String));
        assert_eq!(Schema::String.element(), None);
    }

    #[test]
    fn test_element_record() {
        let schema = Schema::nullable(Schema::array(Schema::nullable(Schema::Record(point()))));
        let element = element_record(&schema).unwrap();
        assert_eq!(element.name(), "Point");
        assert!(element_record(&Schema::nullable(Schema::String)).is_none());
    }

    #[test]
    fn test_require_element_record_error() {
        let err = require_element_record(&Schema::String, "faces").unwrap_err();
        assert!(err.to_string().contains("faces"));
    }

    #[test]
    fn test_field_order_preserved() {
        let record = point();
        let names: Vec<&str> = record.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
    }
}
