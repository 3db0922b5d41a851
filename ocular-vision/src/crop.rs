//! Crop hint annotations

use crate::geometry::BoundingPoly;
use serde::{Deserialize, Serialize};

/// The set of crop hints for an image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CropHintsAnnotation {
    /// Proposed crops, best first
    pub crop_hints: Vec<CropHint>,
}

/// A single proposed crop region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CropHint {
    /// Proposed crop region
    pub bounding_poly: Option<BoundingPoly>,
    /// Confidence that the region is salient
    pub confidence: Option<f64>,
    /// Fraction of image importance inside the region
    pub importance_fraction: Option<f64>,
}
