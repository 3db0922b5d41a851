//! End-to-end scenarios for configured stages

use ocular_project::{Feature, RecordSchema, SchemaError, Stage};
use ocular_test_utils::{fixtures, path_record};
use serde_json::json;

#[test]
fn face_projection_with_partial_schema() {
    // Request only the anger bucket and flattened landmark coordinates.
    let schema = RecordSchema::parse(
        r#"{
            "type": "record", "name": "Output", "fields": [
                {"name": "path", "type": ["null", "string"]},
                {"name": "faces", "type": ["null", {"type": "array", "items": ["null", {
                    "type": "record", "name": "Face", "fields": [
                        {"name": "anger", "type": ["null", "string"]},
                        {"name": "landmarks", "type": ["null", {"type": "array", "items": ["null", {
                            "type": "record", "name": "FaceLandmark", "fields": [
                                {"name": "type", "type": ["null", "string"]},
                                {"name": "x", "type": ["null", "double"]},
                                {"name": "y", "type": ["null", "double"]},
                                {"name": "z", "type": ["null", "double"]}
                            ]
                        }]}]}
                    ]
                }]}]}
            ]
        }"#,
    )
    .unwrap();
    let stage = Stage::new(Feature::Face, "faces", schema).unwrap();

    let out = stage
        .process(&path_record("gs://b/f.jpg"), &fixtures::face_response())
        .unwrap();

    assert_eq!(out.get("path"), Some(&json!("gs://b/f.jpg")));
    let faces = out["faces"].as_array().unwrap();
    assert_eq!(faces.len(), 1);
    let face = faces[0].as_object().unwrap();
    // Exactly the two requested fields, nothing else
    let mut names: Vec<&str> = face.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["anger", "landmarks"]);
    assert_eq!(face["anger"], json!("UNLIKELY"));

    let landmarks = face["landmarks"].as_array().unwrap();
    assert_eq!(landmarks.len(), 1);
    assert_eq!(landmarks[0]["type"], json!("CHIN_GNATHION"));
    for axis in ["x", "y", "z"] {
        let value = landmarks[0][axis].as_f64().unwrap();
        assert!((value - 10.1).abs() < 1e-4, "{axis} = {value}");
    }
}

#[test]
fn product_search_index_time_only() {
    let schema = RecordSchema::parse(
        r#"{
            "type": "record", "name": "Output", "fields": [
                {"name": "products", "type": ["null", {
                    "type": "record", "name": "ProductSearch", "fields": [
                        {"name": "indexTime", "type": ["null", "string"]}
                    ]
                }]}
            ]
        }"#,
    )
    .unwrap();
    let stage = Stage::new(Feature::ProductSearch, "products", schema).unwrap();

    let out = stage
        .process(&path_record("gs://b/p.jpg"), &fixtures::product_response())
        .unwrap();

    assert_eq!(
        out["products"],
        json!({"indexTime": "2018-10-02T15:01:23.045123456Z"})
    );
}

#[test]
fn unknown_feature_rejected_at_configuration() {
    let err = "FENCE_DETECTION".parse::<Feature>().unwrap_err();
    assert!(matches!(err, SchemaError::UnknownFeature(_)));
    assert!(err.to_string().contains("FENCE_DETECTION"));
}
