//! Feature catalog
//!
//! The fixed set of annotation variants the projection engine supports.
//! Feature selection is the only place a raw identifier string enters the
//! system; past [`Feature::from_str`] the enum is closed and every match
//! over it is exhaustive.

use crate::error::SchemaError;
use std::fmt;
use std::str::FromStr;

/// Annotation variant selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Face detection
    Face,
    /// OCR text detection (per-entity text blocks)
    Text,
    /// Full-document text detection (pages through symbols)
    DocumentText,
    /// Crop hint proposals
    CropHints,
    /// Image properties (dominant colors)
    ImageProperties,
    /// Label detection
    Label,
    /// Landmark detection
    Landmark,
    /// Logo detection
    Logo,
    /// Localized object detection
    Object,
    /// Safe-search likelihoods
    SafeSearch,
    /// Web detection
    Web,
    /// Product search
    ProductSearch,
}

impl Feature {
    /// All catalog members, in catalog order
    pub const ALL: [Feature; 12] = [
        Feature::Face,
        Feature::Text,
        Feature::DocumentText,
        Feature::CropHints,
        Feature::ImageProperties,
        Feature::Label,
        Feature::Landmark,
        Feature::Logo,
        Feature::Object,
        Feature::SafeSearch,
        Feature::Web,
        Feature::ProductSearch,
    ];

    /// Canonical identifier, as accepted at configuration time
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Face => "FACE_DETECTION",
            Feature::Text => "TEXT_DETECTION",
            Feature::DocumentText => "DOCUMENT_TEXT_DETECTION",
            Feature::CropHints => "CROP_HINTS",
            Feature::ImageProperties => "IMAGE_PROPERTIES",
            Feature::Label => "LABEL_DETECTION",
            Feature::Landmark => "LANDMARK_DETECTION",
            Feature::Logo => "LOGO_DETECTION",
            Feature::Object => "OBJECT_LOCALIZATION",
            Feature::SafeSearch => "SAFE_SEARCH_DETECTION",
            Feature::Web => "WEB_DETECTION",
            Feature::ProductSearch => "PRODUCT_SEARCH",
        }
    }

    /// Default name of the record produced for this feature
    pub fn record_name(&self) -> &'static str {
        match self {
            Feature::Face => "Face",
            Feature::Text => "Text",
            Feature::DocumentText => "Document",
            Feature::CropHints => "CropHint",
            Feature::ImageProperties => "ColorInfo",
            Feature::Label => "Label",
            Feature::Landmark => "Landmark",
            Feature::Logo => "Logo",
            Feature::Object => "Object",
            Feature::SafeSearch => "SafeSearch",
            Feature::Web => "WebDetection",
            Feature::ProductSearch => "ProductSearch",
        }
    }
}

impl FromStr for Feature {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .iter()
            .copied()
            .find(|feature| feature.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownFeature(s.to_string()))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
