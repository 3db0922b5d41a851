//! Full-shape inference per feature
//!
//! Every feature has a fixed, fully specified output shape. The inferred
//! shape is used when the operator supplies no schema, and is the reference
//! the configured schema is validated against. All fields are nullable;
//! configured schemas may omit any field or sub-field but never add one.

use crate::feature::Feature;
use crate::schema::{Field, RecordSchema, Schema};

fn string() -> Schema {
    Schema::nullable(Schema::String)
}

fn double() -> Schema {
    Schema::nullable(Schema::Double)
}

fn long() -> Schema {
    Schema::nullable(Schema::Long)
}

fn list(element: RecordSchema) -> Schema {
    Schema::nullable(Schema::array(Schema::nullable(Schema::Record(element))))
}

fn nested(record: RecordSchema) -> Schema {
    Schema::nullable(Schema::Record(record))
}

fn vertex() -> RecordSchema {
    RecordSchema::new(
        "Vertex",
        vec![Field::new("x", double()), Field::new("y", double())],
    )
}

fn bounding_poly() -> RecordSchema {
    RecordSchema::new("BoundingPoly", vec![Field::new("vertices", list(vertex()))])
}

fn language() -> RecordSchema {
    RecordSchema::new(
        "Language",
        vec![
            Field::new("code", string()),
            Field::new("confidence", double()),
        ],
    )
}

fn location() -> RecordSchema {
    RecordSchema::new(
        "Location",
        vec![
            Field::new("latitude", double()),
            Field::new("longitude", double()),
        ],
    )
}

// Base field set shared by label, landmark, and logo records.
fn entity_fields() -> Vec<Field> {
    vec![
        Field::new("id", string()),
        Field::new("locale", string()),
        Field::new("description", string()),
        Field::new("score", double()),
        Field::new("topicality", double()),
        Field::new("locations", list(location())),
    ]
}

fn face() -> RecordSchema {
    let landmark = RecordSchema::new(
        "FaceLandmark",
        vec![
            Field::new("type", string()),
            Field::new("x", double()),
            Field::new("y", double()),
            Field::new("z", double()),
        ],
    );
    RecordSchema::new(
        "Face",
        vec![
            Field::new("joy", string()),
            Field::new("sorrow", string()),
            Field::new("anger", string()),
            Field::new("surprise", string()),
            Field::new("underExposed", string()),
            Field::new("blurred", string()),
            Field::new("headwear", string()),
            Field::new("roll", double()),
            Field::new("pan", double()),
            Field::new("tilt", double()),
            Field::new("detectionConfidence", double()),
            Field::new("landmarkingConfidence", double()),
            Field::new("boundingPoly", nested(bounding_poly())),
            Field::new("fdBoundingPoly", nested(bounding_poly())),
            Field::new("landmarks", list(landmark)),
        ],
    )
}

fn text() -> RecordSchema {
    RecordSchema::new(
        "Text",
        vec![
            Field::new("locale", string()),
            Field::new("description", string()),
            Field::new("boundingPoly", nested(bounding_poly())),
        ],
    )
}

fn document() -> RecordSchema {
    let symbol = RecordSchema::new(
        "Symbol",
        vec![
            Field::new("text", string()),
            Field::new("confidence", double()),
            Field::new("languages", list(language())),
        ],
    );
    let word = RecordSchema::new(
        "Word",
        vec![
            Field::new("confidence", double()),
            Field::new("languages", list(language())),
            Field::new("symbols", list(symbol)),
        ],
    );
    let paragraph = RecordSchema::new(
        "Paragraph",
        vec![
            Field::new("confidence", double()),
            Field::new("languages", list(language())),
            Field::new("words", list(word)),
        ],
    );
    let block = RecordSchema::new(
        "Block",
        vec![
            Field::new("type", string()),
            Field::new("confidence", double()),
            Field::new("languages", list(language())),
            Field::new("paragraphs", list(paragraph)),
        ],
    );
    let page = RecordSchema::new(
        "Page",
        vec![
            Field::new("width", long()),
            Field::new("height", long()),
            Field::new("confidence", double()),
            Field::new("languages", list(language())),
            Field::new("blocks", list(block)),
        ],
    );
    RecordSchema::new(
        "Document",
        vec![Field::new("text", string()), Field::new("pages", list(page))],
    )
}

fn crop_hint() -> RecordSchema {
    RecordSchema::new(
        "CropHint",
        vec![
            Field::new("boundingPoly", nested(bounding_poly())),
            Field::new("confidence", double()),
            Field::new("importanceFraction", double()),
        ],
    )
}

fn color_info() -> RecordSchema {
    let color = RecordSchema::new(
        "Color",
        vec![
            Field::new("red", double()),
            Field::new("green", double()),
            Field::new("blue", double()),
            Field::new("alpha", double()),
        ],
    );
    RecordSchema::new(
        "ColorInfo",
        vec![
            Field::new("color", nested(color)),
            Field::new("score", double()),
            Field::new("pixelFraction", double()),
        ],
    )
}

fn label() -> RecordSchema {
    RecordSchema::new("Label", entity_fields())
}

// Landmark and logo share the label field set plus a position.
fn located_entity(name: &str) -> RecordSchema {
    let mut fields = entity_fields();
    fields.push(Field::new("boundingPoly", nested(bounding_poly())));
    RecordSchema::new(name, fields)
}

fn object() -> RecordSchema {
    RecordSchema::new(
        "Object",
        vec![
            Field::new("id", string()),
            Field::new("language", string()),
            Field::new("name", string()),
            Field::new("score", double()),
            Field::new("boundingPoly", nested(bounding_poly())),
        ],
    )
}

fn safe_search() -> RecordSchema {
    RecordSchema::new(
        "SafeSearch",
        vec![
            Field::new("adult", string()),
            Field::new("spoof", string()),
            Field::new("medical", string()),
            Field::new("violence", string()),
            Field::new("racy", string()),
        ],
    )
}

fn web_detection() -> RecordSchema {
    let entity = RecordSchema::new(
        "WebEntity",
        vec![
            Field::new("id", string()),
            Field::new("score", double()),
            Field::new("description", string()),
        ],
    );
    let image = RecordSchema::new(
        "WebImage",
        vec![Field::new("url", string()), Field::new("score", double())],
    );
    let page = RecordSchema::new(
        "WebPage",
        vec![
            Field::new("url", string()),
            Field::new("score", double()),
            Field::new("title", string()),
            Field::new("fullMatchingImages", list(image.clone())),
            Field::new("partialMatchingImages", list(image.clone())),
        ],
    );
    let best_guess = RecordSchema::new(
        "WebLabel",
        vec![
            Field::new("label", string()),
            Field::new("language", string()),
        ],
    );
    RecordSchema::new(
        "WebDetection",
        vec![
            Field::new("entities", list(entity)),
            Field::new("fullMatchingImages", list(image.clone())),
            Field::new("partialMatchingImages", list(image.clone())),
            Field::new("visuallySimilarImages", list(image)),
            Field::new("pages", list(page)),
            Field::new("bestGuessLabels", list(best_guess)),
        ],
    )
}

fn product_search() -> RecordSchema {
    let product = RecordSchema::new(
        "Product",
        vec![
            Field::new("name", string()),
            Field::new("displayName", string()),
            Field::new("description", string()),
            Field::new("category", string()),
            Field::new(
                "labels",
                list(RecordSchema::new(
                    "ProductLabel",
                    vec![Field::new("key", string()), Field::new("value", string())],
                )),
            ),
        ],
    );
    let result = RecordSchema::new(
        "ProductResult",
        vec![
            Field::new("product", nested(product)),
            Field::new("score", double()),
            Field::new("image", string()),
        ],
    );
    let grouped = RecordSchema::new(
        "GroupedResult",
        vec![
            Field::new("boundingPoly", nested(bounding_poly())),
            Field::new("results", list(result.clone())),
        ],
    );
    RecordSchema::new(
        "ProductSearch",
        vec![
            Field::new("indexTime", string()),
            Field::new("results", list(result)),
            Field::new("groupedResults", list(grouped)),
        ],
    )
}

/// Full output-field schema for a feature
///
/// List-shaped features (faces, labels, and the like) infer to a nullable
/// array of records; single-result features (safe search, web detection,
/// product search, full-document text) infer to a nullable record.
pub fn annotation_schema(feature: Feature) -> Schema {
    match feature {
        Feature::Face => list(face()),
        Feature::Text => list(text()),
        Feature::DocumentText => nested(document()),
        Feature::CropHints => list(crop_hint()),
        Feature::ImageProperties => list(color_info()),
        Feature::Label => list(label()),
        Feature::Landmark => list(located_entity("Landmark")),
        Feature::Logo => list(located_entity("Logo")),
        Feature::Object => list(object()),
        Feature::SafeSearch => nested(safe_search()),
        Feature::Web => nested(web_detection()),
        Feature::ProductSearch => nested(product_search()),
    }
}

/// Inferred stage output schema: input pass-through plus the output field
///
/// Every input field is carried over unchanged; the output field is
/// appended, replacing any same-named input field in place.
pub fn output_schema(feature: Feature, output_field: &str, input: &RecordSchema) -> RecordSchema {
    let annotation = annotation_schema(feature);
    let mut fields: Vec<Field> = Vec::with_capacity(input.fields().len() + 1);
    let mut replaced = false;
    for field in input.fields() {
        if field.name == output_field {
            fields.push(Field::new(output_field, annotation.clone()));
            replaced = true;
        } else {
            fields.push(field.clone());
        }
    }
    if !replaced {
        fields.push(Field::new(output_field, annotation));
    }
    RecordSchema::new(input.name(), fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::element_record;

    #[test]
    fn test_every_feature_has_a_shape() {
        for feature in Feature::ALL {
            let schema = annotation_schema(feature);
            assert!(schema.is_nullable(), "{} must be nullable", feature);
        }
    }

    #[test]
    fn test_face_shape() {
        let schema = annotation_schema(Feature::Face);
        let element = element_record(&schema).unwrap();
        assert!(element.has_field("anger"));
        assert!(element.has_field("roll"));
        let landmarks = element.field("landmarks").unwrap();
        let landmark = element_record(landmarks).unwrap();
        for name in ["type", "x", "y", "z"] {
            assert!(landmark.has_field(name));
        }
    }

    #[test]
    fn test_landmark_extends_label() {
        let label = element_record(&annotation_schema(Feature::Label)).unwrap().clone();
        let landmark = element_record(&annotation_schema(Feature::Landmark))
            .unwrap()
            .clone();
        for field in label.fields() {
            assert_eq!(landmark.field(&field.name), Some(&field.schema));
        }
        assert!(landmark.has_field("boundingPoly"));
        assert!(!label.has_field("boundingPoly"));
    }

    #[test]
    fn test_logo_matches_landmark_fields() {
        let landmark = element_record(&annotation_schema(Feature::Landmark))
            .unwrap()
            .clone();
        let logo = element_record(&annotation_schema(Feature::Logo)).unwrap().clone();
        let names = |r: &RecordSchema| {
            r.fields().iter().map(|f| f.name.clone()).collect::<Vec<_>>()
        };
        assert_eq!(names(&landmark), names(&logo));
    }

    #[test]
    fn test_document_depth() {
        let schema = annotation_schema(Feature::DocumentText);
        let document = schema.unwrap_nullable().as_record().unwrap();
        let pages = element_record(document.field("pages").unwrap()).unwrap();
        let blocks = element_record(pages.field("blocks").unwrap()).unwrap();
        let paragraphs = element_record(blocks.field("paragraphs").unwrap()).unwrap();
        let words = element_record(paragraphs.field("words").unwrap()).unwrap();
        let symbols = element_record(words.field("symbols").unwrap()).unwrap();
        assert!(symbols.has_field("text"));
    }

    #[test]
    fn test_output_schema_appends_field() {
        let input = RecordSchema::new(
            "Input",
            vec![Field::new("path", Schema::nullable(Schema::String))],
        );
        let schema = output_schema(Feature::Label, "labels", &input);
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["path", "labels"]);
    }

    #[test]
    fn test_output_schema_replaces_same_named_field() {
        let input = RecordSchema::new(
            "Input",
            vec![
                Field::new("labels", Schema::nullable(Schema::String)),
                Field::new("path", Schema::nullable(Schema::String)),
            ],
        );
        let schema = output_schema(Feature::Label, "labels", &input);
        assert_eq!(schema.fields().len(), 2);
        assert!(element_record(schema.field("labels").unwrap()).is_some());
    }
}
