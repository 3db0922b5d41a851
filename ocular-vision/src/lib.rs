//! Ocular Vision - Annotation result data model
//!
//! Serde structs mirroring the annotation service's JSON responses. The
//! model is deserialization-oriented: every scalar is optional and every
//! list defaults to empty, because the service omits unpopulated fields.
//! The projection engine treats these values as immutable once received.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod color;
pub mod crop;
pub mod document;
pub mod entity;
pub mod face;
pub mod geometry;
pub mod likelihood;
pub mod object;
pub mod product;
pub mod response;
pub mod safe;
pub mod web;

// Re-export commonly used types
pub use color::{Color, ColorInfo, DominantColors, ImageProperties};
pub use crop::{CropHint, CropHintsAnnotation};
pub use document::{
    Block, DetectedLanguage, Page, Paragraph, Symbol, TextAnnotation, TextProperty, Word,
};
pub use entity::{EntityAnnotation, LocationInfo};
pub use face::{FaceAnnotation, FaceLandmark};
pub use geometry::{BoundingPoly, LatLng, Position, Vertex};
pub use likelihood::Likelihood;
pub use object::LocalizedObjectAnnotation;
pub use product::{GroupedResult, Product, ProductLabel, ProductResult, ProductSearchResults};
pub use response::{AnnotateResponse, Status};
pub use safe::SafeSearchAnnotation;
pub use web::{WebDetection, WebEntity, WebImage, WebLabel, WebPage};
