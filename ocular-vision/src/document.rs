//! Full-document text annotations
//!
//! The structured OCR hierarchy: pages hold blocks, blocks hold
//! paragraphs, paragraphs hold words, words hold symbols. Every level
//! carries a confidence and an optional set of detected languages.

use crate::geometry::BoundingPoly;
use serde::{Deserialize, Serialize};

/// Structured text for an entire document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextAnnotation {
    /// Concatenated plain text of the document
    pub text: Option<String>,
    /// Detected pages
    pub pages: Vec<Page>,
}

/// Language and layout properties attached to a structural level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextProperty {
    /// Languages detected at this level
    pub detected_languages: Vec<DetectedLanguage>,
}

/// A detected language with its confidence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DetectedLanguage {
    /// BCP-47 language code
    pub language_code: Option<String>,
    /// Detection confidence
    pub confidence: Option<f64>,
}

/// A detected page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Page {
    /// Level properties
    pub property: Option<TextProperty>,
    /// Page width in pixels
    pub width: Option<i64>,
    /// Page height in pixels
    pub height: Option<i64>,
    /// Blocks on the page
    pub blocks: Vec<Block>,
    /// OCR confidence for the page
    pub confidence: Option<f64>,
}

/// A logical block of content on a page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Block {
    /// Level properties
    pub property: Option<TextProperty>,
    /// Block region
    pub bounding_box: Option<BoundingPoly>,
    /// Block kind, e.g. `TEXT` or `TABLE`
    pub block_type: Option<String>,
    /// Paragraphs inside the block
    pub paragraphs: Vec<Paragraph>,
    /// OCR confidence for the block
    pub confidence: Option<f64>,
}

/// A paragraph inside a block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Paragraph {
    /// Level properties
    pub property: Option<TextProperty>,
    /// Paragraph region
    pub bounding_box: Option<BoundingPoly>,
    /// Words inside the paragraph
    pub words: Vec<Word>,
    /// OCR confidence for the paragraph
    pub confidence: Option<f64>,
}

/// A word inside a paragraph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Word {
    /// Level properties
    pub property: Option<TextProperty>,
    /// Word region
    pub bounding_box: Option<BoundingPoly>,
    /// Symbols inside the word
    pub symbols: Vec<Symbol>,
    /// OCR confidence for the word
    pub confidence: Option<f64>,
}

/// A single symbol
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Symbol {
    /// Level properties
    pub property: Option<TextProperty>,
    /// Symbol region
    pub bounding_box: Option<BoundingPoly>,
    /// The symbol text
    pub text: Option<String>,
    /// OCR confidence for the symbol
    pub confidence: Option<f64>,
}
