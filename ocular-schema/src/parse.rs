//! JSON parsing and printing for output schemas
//!
//! The text form is the one pipeline operators supply at configuration
//! time: primitives as type-name strings, arrays as
//! `{"type":"array","items":...}`, records as
//! `{"type":"record","name":...,"fields":[...]}`, and nullables as the
//! two-branch union `["null", ...]`.

use crate::error::{Result, SchemaError};
use crate::schema::{Field, RecordSchema, Schema};
use serde_json::{json, Value};

impl Schema {
    /// Parse a schema from JSON text
    pub fn parse(text: &str) -> Result<Schema> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| SchemaError::InvalidJson(e.to_string()))?;
        Schema::from_json(&value)
    }

    /// Parse a schema from an already-parsed JSON value
    pub fn from_json(value: &Value) -> Result<Schema> {
        match value {
            Value::String(name) => primitive(name),
            Value::Array(branches) => union(branches),
            Value::Object(map) => {
                let kind = map
                    .get("type")
                    .and_then(Value::as_str)
                    .ok_or_else(|| SchemaError::Malformed("missing \"type\"".to_string()))?;
                match kind {
                    "array" => {
                        let items = map.get("items").ok_or_else(|| {
                            SchemaError::Malformed("array without \"items\"".to_string())
                        })?;
                        Ok(Schema::array(Schema::from_json(items)?))
                    }
                    "record" => record(map),
                    other => primitive(other),
                }
            }
            _ => Err(SchemaError::Malformed(format!(
                "unexpected schema node: {}",
                value
            ))),
        }
    }

    /// Print the schema as a JSON value, the inverse of [`Schema::from_json`]
    pub fn to_json(&self) -> Value {
        match self {
            Schema::Boolean => json!("boolean"),
            Schema::Int => json!("int"),
            Schema::Long => json!("long"),
            Schema::Float => json!("float"),
            Schema::Double => json!("double"),
            Schema::String => json!("string"),
            Schema::Array(element) => json!({"type": "array", "items": element.to_json()}),
            Schema::Record(record) => {
                let fields: Vec<Value> = record
                    .fields()
                    .iter()
                    .map(|field| json!({"name": field.name, "type": field.schema.to_json()}))
                    .collect();
                json!({"type": "record", "name": record.name(), "fields": fields})
            }
            Schema::Nullable(inner) => json!([Value::Null, inner.to_json()]),
        }
    }
}

impl RecordSchema {
    /// Parse a top-level record schema from JSON text
    pub fn parse(text: &str) -> Result<RecordSchema> {
        match Schema::parse(text)? {
            Schema::Record(record) => Ok(record),
            other => Err(SchemaError::Malformed(format!(
                "top-level schema must be a record, found {}",
                other.type_name()
            ))),
        }
    }
}

fn primitive(name: &str) -> Result<Schema> {
    match name {
        "boolean" => Ok(Schema::Boolean),
        "int" => Ok(Schema::Int),
        "long" => Ok(Schema::Long),
        "float" => Ok(Schema::Float),
        "double" => Ok(Schema::Double),
        "string" => Ok(Schema::String),
        other => Err(SchemaError::Malformed(format!(
            "unknown type name: {}",
            other
        ))),
    }
}

// Only the two-branch ["null", T] union is supported.
fn union(branches: &[Value]) -> Result<Schema> {
    match branches {
        [Value::Null, inner] => Ok(Schema::nullable(Schema::from_json(inner)?)),
        [inner, Value::Null] => Ok(Schema::nullable(Schema::from_json(inner)?)),
        _ => Err(SchemaError::Malformed(
            "unions must be [\"null\", type]".to_string(),
        )),
    }
}

fn record(map: &serde_json::Map<String, Value>) -> Result<Schema> {
    let name = map
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| SchemaError::Malformed("record without \"name\"".to_string()))?;
    let declared = map
        .get("fields")
        .and_then(Value::as_array)
        .ok_or_else(|| SchemaError::Malformed("record without \"fields\"".to_string()))?;

    let mut fields = Vec::with_capacity(declared.len());
    for entry in declared {
        let field_name = entry
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| SchemaError::Malformed("field without \"name\"".to_string()))?;
        let field_type = entry
            .get("type")
            .ok_or_else(|| SchemaError::Malformed(format!("field {} without \"type\"", field_name)))?;
        fields.push(Field::new(field_name, Schema::from_json(field_type)?));
    }
    Ok(Schema::record(name, fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINT: &str = r#"{
        "type": "record",
        "name": "Point",
        "fields": [
            {"name": "x", "type": ["null", "double"]},
            {"name": "y", "type": ["null", "double"]}
        ]
    }"#;

    #[test]
    fn test_parse_record() {
        let record = RecordSchema::parse(POINT).unwrap();
        assert_eq!(record.name(), "Point");
        assert_eq!(record.fields().len(), 2);
        assert_eq!(
            record.field("x").unwrap(),
            &Schema::nullable(Schema::Double)
        );
    }

    #[test]
    fn test_parse_array_of_records() {
        let text = format!(r#"{{"type": "array", "items": {}}}"#, POINT);
        let schema = Schema::parse(&text).unwrap();
        let element = schema.element().unwrap();
        assert_eq!(element.as_record().unwrap().name(), "Point");
    }

    #[test]
    fn test_parse_null_first_or_second() {
        assert_eq!(
            Schema::parse(r#"["null", "string"]"#).unwrap(),
            Schema::nullable(Schema::String)
        );
        assert_eq!(
            Schema::parse(r#"["string", null]"#).unwrap(),
            Schema::nullable(Schema::String)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_primitive() {
        assert!(matches!(
            Schema::parse(r#""varchar""#),
            Err(SchemaError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_rejects_wide_union() {
        assert!(Schema::parse(r#"["null", "string", "long"]"#).is_err());
    }

    #[test]
    fn test_top_level_must_be_record() {
        assert!(RecordSchema::parse(r#""string""#).is_err());
    }

    fn arb_schema() -> impl proptest::strategy::Strategy<Value = Schema> {
        use proptest::prelude::*;
        let leaf = prop_oneof![
            Just(Schema::Boolean),
            Just(Schema::Int),
            Just(Schema::Long),
            Just(Schema::Float),
            Just(Schema::Double),
            Just(Schema::String),
        ];
        leaf.prop_recursive(3, 16, 4, |inner| {
            prop_oneof![
                inner.clone().prop_map(Schema::nullable),
                inner.clone().prop_map(Schema::array),
                prop::collection::vec(("[a-z]{1,8}", inner), 0..4).prop_map(|fields| {
                    let fields = fields
                        .into_iter()
                        .map(|(name, schema)| Field::new(name, schema))
                        .collect();
                    Schema::record("Rec", fields)
                }),
            ]
        })
    }

    proptest::proptest! {
        #[test]
        fn print_parse_roundtrip_holds(schema in arb_schema()) {
            let reparsed = Schema::from_json(&schema.to_json()).unwrap();
            proptest::prop_assert_eq!(reparsed, schema);
        }
    }
}
