//! Entity annotations, shared by text, label, landmark, and logo results

use crate::geometry::{BoundingPoly, LatLng};
use serde::{Deserialize, Serialize};

/// A detected entity: a label, landmark, logo, or OCR text block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntityAnnotation {
    /// Opaque entity identifier
    pub mid: Option<String>,
    /// Locale of the description
    pub locale: Option<String>,
    /// Human-readable description
    pub description: Option<String>,
    /// Overall confidence score
    pub score: Option<f64>,
    /// Relevancy of the entity to the whole image
    pub topicality: Option<f64>,
    /// Image region producing the entity, populated for landmarks, logos,
    /// and text blocks
    pub bounding_poly: Option<BoundingPoly>,
    /// Locations of the detected entity in the world
    pub locations: Vec<LocationInfo>,
}

/// A single entity location
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocationInfo {
    /// Geographic coordinates
    pub lat_lng: Option<LatLng>,
}
