//! Localized object annotations

use crate::geometry::BoundingPoly;
use serde::{Deserialize, Serialize};

/// An object detected at a position in the image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocalizedObjectAnnotation {
    /// Opaque object identifier
    pub mid: Option<String>,
    /// BCP-47 language of `name`
    pub language_code: Option<String>,
    /// Object name
    pub name: Option<String>,
    /// Detection confidence
    pub score: Option<f64>,
    /// Object region, in normalized coordinates
    pub bounding_poly: Option<BoundingPoly>,
}
