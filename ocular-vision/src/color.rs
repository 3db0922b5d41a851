//! Image property annotations

use serde::{Deserialize, Serialize};

/// Image-wide properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageProperties {
    /// Dominant color summary
    pub dominant_colors: Option<DominantColors>,
}

/// Dominant colors of an image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DominantColors {
    /// Colors ordered by coverage
    pub colors: Vec<ColorInfo>,
}

/// A dominant color with its coverage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorInfo {
    /// Color channels
    pub color: Option<Color>,
    /// Image-specific score
    pub score: Option<f64>,
    /// Fraction of pixels the color occupies
    pub pixel_fraction: Option<f64>,
}

/// RGBA color channels in `[0, 255]` (alpha in `[0, 1]`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Color {
    /// Red channel
    pub red: Option<f64>,
    /// Green channel
    pub green: Option<f64>,
    /// Blue channel
    pub blue: Option<f64>,
    /// Alpha channel
    pub alpha: Option<f64>,
}
