//! The per-item annotation response envelope

use crate::color::ImageProperties;
use crate::crop::CropHintsAnnotation;
use crate::document::TextAnnotation;
use crate::entity::EntityAnnotation;
use crate::face::FaceAnnotation;
use crate::object::LocalizedObjectAnnotation;
use crate::product::ProductSearchResults;
use crate::safe::SafeSearchAnnotation;
use crate::web::WebDetection;
use serde::{Deserialize, Serialize};

/// Everything the annotation service returned for one image or document
///
/// Only the slots matching the requested features are populated. A failed
/// item carries `error` instead of annotations; callers must check
/// [`AnnotateResponse::error`] before projecting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnnotateResponse {
    /// Detected faces
    pub face_annotations: Vec<FaceAnnotation>,
    /// OCR text entities
    pub text_annotations: Vec<EntityAnnotation>,
    /// Structured full-document text
    pub full_text_annotation: Option<TextAnnotation>,
    /// Crop hints
    pub crop_hints_annotation: Option<CropHintsAnnotation>,
    /// Dominant colors and other image properties
    pub image_properties_annotation: Option<ImageProperties>,
    /// Detected labels
    pub label_annotations: Vec<EntityAnnotation>,
    /// Detected landmarks
    pub landmark_annotations: Vec<EntityAnnotation>,
    /// Detected logos
    pub logo_annotations: Vec<EntityAnnotation>,
    /// Localized objects
    pub localized_object_annotations: Vec<LocalizedObjectAnnotation>,
    /// Safe-search verdict
    pub safe_search_annotation: Option<SafeSearchAnnotation>,
    /// Web detection results
    pub web_detection: Option<WebDetection>,
    /// Product search results
    pub product_search_results: Option<ProductSearchResults>,
    /// Per-item failure reported by the service
    pub error: Option<Status>,
}

/// A per-item error status embedded in the response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Status {
    /// Canonical error code
    pub code: Option<i64>,
    /// Developer-facing message
    pub message: Option<String>,
}

impl Status {
    /// The error message, or a fixed fallback when the service omitted it
    pub fn message_or_default(&self) -> &str {
        self.message.as_deref().unwrap_or("unspecified upstream error")
    }
}
