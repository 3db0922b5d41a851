//! Label, landmark, and logo projection
//!
//! All three variants are entity annotations. Labels are the base field
//! set; landmarks and logos add the bounding polygon on top of it and
//! differ only in which response list they read.

use crate::error::Result;
use crate::leaf::{location_record, poly_record};
use crate::record::{float, project_list, project_nested, set_if_requested, string, Record};
use ocular_schema::RecordSchema;
use ocular_vision::EntityAnnotation;

/// Project the base entity field set shared by labels, landmarks, and logos
pub fn entity_record(entity: &EntityAnnotation, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "id", |_| Ok(string(entity.mid.as_deref())))?;
    set_if_requested(&mut out, schema, "locale", |_| {
        Ok(string(entity.locale.as_deref()))
    })?;
    set_if_requested(&mut out, schema, "description", |_| {
        Ok(string(entity.description.as_deref()))
    })?;
    set_if_requested(&mut out, schema, "score", |_| Ok(float(entity.score)))?;
    set_if_requested(&mut out, schema, "topicality", |_| {
        Ok(float(entity.topicality))
    })?;
    set_if_requested(&mut out, schema, "locations", |fs| {
        project_list(&entity.locations, fs, "locations", location_record)
    })?;
    Ok(out)
}

/// Project an entity that carries a position: the base field set plus the
/// bounding polygon
pub fn located_entity_record(entity: &EntityAnnotation, schema: &RecordSchema) -> Result<Record> {
    let mut out = entity_record(entity, schema)?;
    set_if_requested(&mut out, schema, "boundingPoly", |fs| {
        project_nested(entity.bounding_poly.as_ref(), fs, "boundingPoly", poly_record)
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocular_schema::{annotation_schema, element_record, Feature};
    use serde_json::json;

    fn entity() -> EntityAnnotation {
        serde_json::from_value(json!({
            "mid": "/m/0c9ph5",
            "locale": "en",
            "description": "flower",
            "score": 0.92,
            "topicality": 0.92,
            "locations": [{"latLng": {"latitude": 1.5, "longitude": -3.0}}],
            "boundingPoly": {"vertices": [{"x": 1.0, "y": 2.0}]}
        }))
        .unwrap()
    }

    #[test]
    fn test_label_full_shape() {
        let schema = annotation_schema(Feature::Label);
        let element = element_record(&schema).unwrap();
        let out = entity_record(&entity(), element).unwrap();
        assert_eq!(out.get("id"), Some(&json!("/m/0c9ph5")));
        assert_eq!(out.get("description"), Some(&json!("flower")));
        assert_eq!(
            out.get("locations"),
            Some(&json!([{"latitude": 1.5, "longitude": -3.0}]))
        );
        // Labels never carry a polygon
        assert!(!out.contains_key("boundingPoly"));
    }

    #[test]
    fn test_landmark_adds_polygon() {
        let schema = annotation_schema(Feature::Landmark);
        let element = element_record(&schema).unwrap();
        let out = located_entity_record(&entity(), element).unwrap();
        assert_eq!(
            out.get("boundingPoly"),
            Some(&json!({"vertices": [{"x": 1.0, "y": 2.0}]}))
        );
        assert_eq!(out.get("score"), Some(&json!(0.92)));
    }

    #[test]
    fn test_polygon_not_set_when_not_requested() {
        let schema = annotation_schema(Feature::Label);
        let element = element_record(&schema).unwrap();
        // The label schema has no boundingPoly field, so even the located
        // extractor leaves it out.
        let out = located_entity_record(&entity(), element).unwrap();
        assert!(!out.contains_key("boundingPoly"));
    }
}
