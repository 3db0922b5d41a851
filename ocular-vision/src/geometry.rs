//! Shared geometry types

use serde::{Deserialize, Serialize};

/// A 2D point on the image
///
/// Pixel vertices carry integer coordinates, normalized vertices carry
/// fractions in `[0, 1]`; both deserialize into the same type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vertex {
    /// X coordinate
    pub x: Option<f64>,
    /// Y coordinate
    pub y: Option<f64>,
}

/// A 3D point, used for face landmark positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    /// X coordinate
    pub x: Option<f64>,
    /// Y coordinate
    pub y: Option<f64>,
    /// Z coordinate, depth relative to the image plane
    pub z: Option<f64>,
}

/// An ordered polygon over image points
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoundingPoly {
    /// Pixel-coordinate vertices
    pub vertices: Vec<Vertex>,
    /// Normalized-coordinate vertices
    pub normalized_vertices: Vec<Vertex>,
}

impl BoundingPoly {
    /// The populated vertex list: pixel vertices when present, otherwise
    /// normalized vertices
    pub fn points(&self) -> &[Vertex] {
        if self.vertices.is_empty() {
            &self.normalized_vertices
        } else {
            &self.vertices
        }
    }
}

/// A geographic coordinate pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatLng {
    /// Degrees latitude
    pub latitude: Option<f64>,
    /// Degrees longitude
    pub longitude: Option<f64>,
}
