//! Localized object projection

use crate::error::Result;
use crate::leaf::poly_record;
use crate::record::{float, project_nested, set_if_requested, string, Record};
use ocular_schema::RecordSchema;
use ocular_vision::LocalizedObjectAnnotation;

/// Project one localized object
pub fn object_record(object: &LocalizedObjectAnnotation, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "id", |_| Ok(string(object.mid.as_deref())))?;
    set_if_requested(&mut out, schema, "language", |_| {
        Ok(string(object.language_code.as_deref()))
    })?;
    set_if_requested(&mut out, schema, "name", |_| Ok(string(object.name.as_deref())))?;
    set_if_requested(&mut out, schema, "score", |_| Ok(float(object.score)))?;
    set_if_requested(&mut out, schema, "boundingPoly", |fs| {
        project_nested(object.bounding_poly.as_ref(), fs, "boundingPoly", poly_record)
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocular_schema::{annotation_schema, element_record, Feature};
    use serde_json::json;

    #[test]
    fn test_object_with_normalized_vertices() {
        let object: LocalizedObjectAnnotation = serde_json::from_value(json!({
            "mid": "/m/01bqk0",
            "name": "Bicycle",
            "score": 0.89,
            "boundingPoly": {"normalizedVertices": [{"x": 0.1, "y": 0.2}]}
        }))
        .unwrap();
        let schema = annotation_schema(Feature::Object);
        let out = object_record(&object, element_record(&schema).unwrap()).unwrap();
        assert_eq!(out.get("name"), Some(&json!("Bicycle")));
        assert_eq!(
            out.get("boundingPoly"),
            Some(&json!({"vertices": [{"x": 0.1, "y": 0.2}]}))
        );
    }
}
