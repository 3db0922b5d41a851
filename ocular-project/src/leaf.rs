//! Leaf extractors for shared sub-records
//!
//! Vertices, positions, languages, locations, and color channels appear in
//! several variants; each extractor honors only the fields present in the
//! sub-schema it is handed.

use crate::error::Result;
use crate::record::{float, project_list, set_if_requested, string, Record};
use ocular_schema::{RecordSchema, Schema};
use ocular_vision::{BoundingPoly, Color, DetectedLanguage, LocationInfo, Position, TextProperty};

/// Project a 2D vertex
pub fn vertex_record(vertex: &ocular_vision::Vertex, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "x", |_| Ok(float(vertex.x)))?;
    set_if_requested(&mut out, schema, "y", |_| Ok(float(vertex.y)))?;
    Ok(out)
}

/// Project a bounding polygon
///
/// Uses pixel vertices when present, normalized vertices otherwise.
pub fn poly_record(poly: &BoundingPoly, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "vertices", |fs| {
        project_list(poly.points(), fs, "vertices", vertex_record)
    })?;
    Ok(out)
}

/// Flatten a 3D position's coordinates into the caller's record
pub fn position_fields(
    out: &mut Record,
    schema: &RecordSchema,
    position: Option<&Position>,
) -> Result<()> {
    set_if_requested(out, schema, "x", |_| Ok(float(position.and_then(|p| p.x))))?;
    set_if_requested(out, schema, "y", |_| Ok(float(position.and_then(|p| p.y))))?;
    set_if_requested(out, schema, "z", |_| Ok(float(position.and_then(|p| p.z))))?;
    Ok(())
}

/// Project a detected language
pub fn language_record(language: &DetectedLanguage, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "code", |_| {
        Ok(string(language.language_code.as_deref()))
    })?;
    set_if_requested(&mut out, schema, "confidence", |_| {
        Ok(float(language.confidence))
    })?;
    Ok(out)
}

/// Project the detected languages of a document level
///
/// A missing property projects to an empty list.
pub fn languages_value(property: Option<&TextProperty>, field_schema: &Schema) -> Result<serde_json::Value> {
    let languages = property
        .map(|p| p.detected_languages.as_slice())
        .unwrap_or(&[]);
    project_list(languages, field_schema, "languages", language_record)
}

/// Project an entity location
pub fn location_record(location: &LocationInfo, schema: &RecordSchema) -> Result<Record> {
    let coordinates = location.lat_lng;
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "latitude", |_| {
        Ok(float(coordinates.and_then(|c| c.latitude)))
    })?;
    set_if_requested(&mut out, schema, "longitude", |_| {
        Ok(float(coordinates.and_then(|c| c.longitude)))
    })?;
    Ok(out)
}

/// Project a color channel set
pub fn color_record(color: &Color, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "red", |_| Ok(float(color.red)))?;
    set_if_requested(&mut out, schema, "green", |_| Ok(float(color.green)))?;
    set_if_requested(&mut out, schema, "blue", |_| Ok(float(color.blue)))?;
    set_if_requested(&mut out, schema, "alpha", |_| Ok(float(color.alpha)))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocular_schema::Field;
    use ocular_vision::Vertex;
    use serde_json::json;

    #[test]
    fn test_vertex_partial_schema() {
        let schema = RecordSchema::new(
            "Vertex",
            vec![Field::new("x", Schema::nullable(Schema::Double))],
        );
        let vertex = Vertex {
            x: Some(10.0),
            y: Some(20.0),
        };
        let out = vertex_record(&vertex, &schema).unwrap();
        assert_eq!(serde_json::Value::Object(out), json!({"x": 10.0}));
    }

    #[test]
    fn test_position_flattening() {
        let schema = RecordSchema::new(
            "Landmark",
            vec![
                Field::new("x", Schema::nullable(Schema::Double)),
                Field::new("z", Schema::nullable(Schema::Double)),
            ],
        );
        let position = Position {
            x: Some(1.0),
            y: Some(2.0),
            z: Some(3.0),
        };
        let mut out = Record::new();
        position_fields(&mut out, &schema, Some(&position)).unwrap();
        assert_eq!(serde_json::Value::Object(out), json!({"x": 1.0, "z": 3.0}));
    }

    #[test]
    fn test_position_absent_projects_null() {
        let schema = RecordSchema::new(
            "Landmark",
            vec![Field::new("x", Schema::nullable(Schema::Double))],
        );
        let mut out = Record::new();
        position_fields(&mut out, &schema, None).unwrap();
        assert_eq!(out.get("x"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn test_color_channels() {
        let schema = RecordSchema::new(
            "Color",
            vec![
                Field::new("red", Schema::nullable(Schema::Double)),
                Field::new("alpha", Schema::nullable(Schema::Double)),
            ],
        );
        let color = Color {
            red: Some(12.0),
            green: Some(34.0),
            blue: Some(56.0),
            alpha: None,
        };
        let out = color_record(&color, &schema).unwrap();
        assert_eq!(
            serde_json::Value::Object(out),
            json!({"red": 12.0, "alpha": null})
        );
    }
}
