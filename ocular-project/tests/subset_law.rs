//! The schema-subset law: for any structural subset of a variant's full
//! shape, the projected value's field set equals the subset exactly, at
//! every nesting level.

use ocular_project::{Feature, Stage};
use ocular_schema::{annotation_schema, element_record, Field, RecordSchema, Schema};
use ocular_test_utils::{fixtures, path_record, subsets};
use ocular_vision::AnnotateResponse;
use proptest::prelude::*;
use serde_json::Value;
use std::collections::BTreeSet;

/// Assert a projected value carries exactly the schema's fields
fn assert_conforms(value: &Value, schema: &Schema) {
    match schema {
        Schema::Nullable(inner) => {
            if !value.is_null() {
                assert_conforms(value, inner);
            }
        }
        Schema::Array(element) => {
            let items = value.as_array().expect("array schema requires array value");
            for item in items {
                assert_conforms(item, element);
            }
        }
        Schema::Record(record) => {
            let object = value.as_object().expect("record schema requires object value");
            let expected: BTreeSet<&str> = record.fields().iter().map(|f| f.name.as_str()).collect();
            let actual: BTreeSet<&str> = object.keys().map(String::as_str).collect();
            assert_eq!(actual, expected, "field set must match schema exactly");
            for field in record.fields() {
                assert_conforms(&object[&field.name], &field.schema);
            }
        }
        Schema::String => assert!(value.is_null() || value.is_string()),
        _ => assert!(value.is_null() || value.is_number() || value.is_boolean()),
    }
}

fn element_subset(feature: Feature) -> BoxedStrategy<RecordSchema> {
    let full = annotation_schema(feature);
    let element = element_record(&full).expect("list-shaped feature").clone();
    subsets::subset_record(&element)
}

fn record_subset(feature: Feature) -> BoxedStrategy<RecordSchema> {
    let full = annotation_schema(feature);
    let record = full
        .unwrap_nullable()
        .as_record()
        .expect("record-shaped feature")
        .clone();
    subsets::subset_record(&record)
}

fn check_list_feature(feature: Feature, subset: RecordSchema, response: &AnnotateResponse) {
    let field_schema = Schema::nullable(Schema::array(Schema::nullable(Schema::Record(subset))));
    check_feature(feature, field_schema, response);
}

fn check_record_feature(feature: Feature, subset: RecordSchema, response: &AnnotateResponse) {
    let field_schema = Schema::nullable(Schema::Record(subset));
    check_feature(feature, field_schema, response);
}

fn check_feature(feature: Feature, field_schema: Schema, response: &AnnotateResponse) {
    let schema = RecordSchema::new(
        "Output",
        vec![
            Field::new("path", Schema::nullable(Schema::String)),
            Field::new("out", field_schema.clone()),
        ],
    );
    let stage = Stage::new(feature, "out", schema).unwrap();
    let out = stage.process(&path_record("gs://b/f.jpg"), response).unwrap();

    let top: BTreeSet<&str> = out.keys().map(String::as_str).collect();
    assert_eq!(top, BTreeSet::from(["path", "out"]));
    assert_conforms(&out["out"], &field_schema);
}

proptest! {
    #[test]
    fn face_subsets(subset in element_subset(Feature::Face)) {
        check_list_feature(Feature::Face, subset, &fixtures::face_response());
    }

    #[test]
    fn label_subsets(subset in element_subset(Feature::Label)) {
        check_list_feature(Feature::Label, subset, &fixtures::label_response());
    }

    #[test]
    fn landmark_subsets(subset in element_subset(Feature::Landmark)) {
        check_list_feature(Feature::Landmark, subset, &fixtures::landmark_response());
    }

    #[test]
    fn document_subsets(subset in record_subset(Feature::DocumentText)) {
        check_record_feature(Feature::DocumentText, subset, &fixtures::document_response());
    }

    #[test]
    fn web_subsets(subset in record_subset(Feature::Web)) {
        check_record_feature(Feature::Web, subset, &fixtures::web_response());
    }

    #[test]
    fn product_subsets(subset in record_subset(Feature::ProductSearch)) {
        check_record_feature(Feature::ProductSearch, subset, &fixtures::product_response());
    }
}
