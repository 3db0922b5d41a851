//! Canned annotation responses
//!
//! One fixture per variant, shaped like real service replies, plus a
//! combined response covering every slot at once.

use ocular_vision::AnnotateResponse;
use serde_json::json;

fn response(value: serde_json::Value) -> AnnotateResponse {
    serde_json::from_value(value).expect("fixture must deserialize")
}

/// A face response: one face, one landmark
pub fn face_response() -> AnnotateResponse {
    response(json!({
        "faceAnnotations": [{
            "angerLikelihood": "UNLIKELY",
            "joyLikelihood": "POSSIBLE",
            "rollAngle": 0.2,
            "panAngle": 0.1,
            "tiltAngle": 0.3,
            "detectionConfidence": 0.97,
            "boundingPoly": {"vertices": [{"x": 10.0, "y": 10.0}, {"x": 200.0, "y": 200.0}]},
            "landmarks": [
                {"type": "CHIN_GNATHION", "position": {"x": 10.1, "y": 10.1, "z": 10.1}}
            ]
        }]
    }))
}

/// An OCR text response: two text blocks
pub fn text_response() -> AnnotateResponse {
    response(json!({
        "textAnnotations": [
            {
                "locale": "en",
                "description": "STOP\nAHEAD",
                "boundingPoly": {"vertices": [{"x": 0.0, "y": 0.0}, {"x": 50.0, "y": 20.0}]}
            },
            {
                "description": "STOP",
                "boundingPoly": {"vertices": [{"x": 0.0, "y": 0.0}, {"x": 25.0, "y": 10.0}]}
            }
        ]
    }))
}

/// A full-document text response with every structural level populated
pub fn document_response() -> AnnotateResponse {
    response(json!({
        "fullTextAnnotation": {
            "text": "Hi",
            "pages": [{
                "width": 640,
                "height": 480,
                "confidence": 0.98,
                "property": {"detectedLanguages": [{"languageCode": "en", "confidence": 0.93}]},
                "blocks": [{
                    "blockType": "TEXT",
                    "confidence": 0.97,
                    "paragraphs": [{
                        "confidence": 0.96,
                        "words": [{
                            "confidence": 0.95,
                            "symbols": [
                                {"text": "H", "confidence": 0.94},
                                {"text": "i", "confidence": 0.94}
                            ]
                        }]
                    }]
                }]
            }]
        }
    }))
}

/// A crop hints response: two hints in priority order
pub fn crop_hints_response() -> AnnotateResponse {
    response(json!({
        "cropHintsAnnotation": {
            "cropHints": [
                {
                    "boundingPoly": {"vertices": [{"x": 0.0, "y": 0.0}, {"x": 100.0, "y": 100.0}]},
                    "confidence": 0.9,
                    "importanceFraction": 0.7
                },
                {
                    "boundingPoly": {"vertices": [{"x": 10.0, "y": 10.0}, {"x": 80.0, "y": 80.0}]},
                    "confidence": 0.5,
                    "importanceFraction": 0.3
                }
            ]
        }
    }))
}

/// An image properties response: three dominant colors
pub fn image_properties_response() -> AnnotateResponse {
    response(json!({
        "imagePropertiesAnnotation": {
            "dominantColors": {
                "colors": [
                    {"color": {"red": 230.0, "green": 224.0, "blue": 212.0}, "score": 0.4, "pixelFraction": 0.2},
                    {"color": {"red": 69.0, "green": 76.0, "blue": 64.0}, "score": 0.3, "pixelFraction": 0.1},
                    {"color": {"red": 132.0, "green": 138.0, "blue": 121.0}, "score": 0.2, "pixelFraction": 0.05}
                ]
            }
        }
    }))
}

/// A label response: two labels in score order
pub fn label_response() -> AnnotateResponse {
    response(json!({
        "labelAnnotations": [
            {"mid": "/m/01yrx", "description": "cat", "score": 0.98, "topicality": 0.98},
            {"mid": "/m/04rky", "description": "mammal", "score": 0.91, "topicality": 0.91}
        ]
    }))
}

/// A landmark response: one located entity
pub fn landmark_response() -> AnnotateResponse {
    response(json!({
        "landmarkAnnotations": [{
            "mid": "/m/02j81",
            "description": "Eiffel Tower",
            "score": 0.87,
            "locations": [{"latLng": {"latitude": 48.8584, "longitude": 2.2945}}],
            "boundingPoly": {"vertices": [{"x": 40.0, "y": 20.0}, {"x": 300.0, "y": 400.0}]}
        }]
    }))
}

/// A logo response: one located entity
pub fn logo_response() -> AnnotateResponse {
    response(json!({
        "logoAnnotations": [{
            "mid": "/m/045c7b",
            "description": "Example Corp",
            "score": 0.77,
            "boundingPoly": {"vertices": [{"x": 5.0, "y": 5.0}, {"x": 60.0, "y": 30.0}]}
        }]
    }))
}

/// A localized object response: one object with normalized vertices
pub fn object_response() -> AnnotateResponse {
    response(json!({
        "localizedObjectAnnotations": [{
            "mid": "/m/01bqk0",
            "languageCode": "en",
            "name": "Bicycle",
            "score": 0.89,
            "boundingPoly": {"normalizedVertices": [{"x": 0.1, "y": 0.2}, {"x": 0.8, "y": 0.9}]}
        }]
    }))
}

/// A safe-search response
pub fn safe_search_response() -> AnnotateResponse {
    response(json!({
        "safeSearchAnnotation": {
            "adult": "VERY_UNLIKELY",
            "spoof": "UNLIKELY",
            "medical": "UNLIKELY",
            "violence": "POSSIBLE",
            "racy": "UNLIKELY"
        }
    }))
}

/// A web detection response with nested image lists
pub fn web_response() -> AnnotateResponse {
    response(json!({
        "webDetection": {
            "webEntities": [
                {"entityId": "/m/02y_9m", "score": 0.5, "description": "cliff"},
                {"entityId": "/m/09t49", "score": 0.4, "description": "coast"}
            ],
            "fullMatchingImages": [{"url": "https://example.com/full.jpg", "score": 0.9}],
            "visuallySimilarImages": [{"url": "https://example.com/similar.jpg"}],
            "pagesWithMatchingImages": [{
                "url": "https://example.com/page",
                "pageTitle": "Cliffs of the coast",
                "score": 0.8,
                "fullMatchingImages": [{"url": "https://example.com/page/a.jpg", "score": 0.7}]
            }],
            "bestGuessLabels": [{"label": "cliff coast", "languageCode": "en"}]
        }
    }))
}

/// A product search response with one result/grouped-result pair
pub fn product_response() -> AnnotateResponse {
    response(json!({
        "productSearchResults": {
            "indexTime": "2018-10-02T15:01:23.045123456Z",
            "results": [{
                "product": {
                    "name": "projects/p/locations/l/products/x",
                    "displayName": "mug",
                    "productCategory": "homegoods",
                    "productLabels": [{"key": "style", "value": "ceramic"}]
                },
                "score": 0.7,
                "image": "projects/p/locations/l/products/x/referenceImages/i"
            }],
            "productGroupedResults": [{
                "boundingPoly": {"vertices": [{"x": 1.0, "y": 1.0}, {"x": 2.0, "y": 2.0}]},
                "results": [{"score": 0.7}]
            }]
        }
    }))
}

/// A failed item: an error status and no annotations
pub fn error_response(message: &str) -> AnnotateResponse {
    response(json!({"error": {"code": 3, "message": message}}))
}
