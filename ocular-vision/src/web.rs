//! Web detection annotations

use serde::{Deserialize, Serialize};

/// Web references to an image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebDetection {
    /// Entities deduced from similar images on the web
    pub web_entities: Vec<WebEntity>,
    /// Fully matching images
    pub full_matching_images: Vec<WebImage>,
    /// Partially matching images
    pub partial_matching_images: Vec<WebImage>,
    /// Visually similar images
    pub visually_similar_images: Vec<WebImage>,
    /// Web pages containing matching images
    pub pages_with_matching_images: Vec<WebPage>,
    /// Best-guess topical labels
    pub best_guess_labels: Vec<WebLabel>,
}

/// An entity deduced from web content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebEntity {
    /// Opaque entity identifier
    pub entity_id: Option<String>,
    /// Relevancy score
    pub score: Option<f64>,
    /// Canonical description
    pub description: Option<String>,
}

/// An image found on the web
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebImage {
    /// Image URL
    pub url: Option<String>,
    /// Relevancy score
    pub score: Option<f64>,
}

/// A web page with matching images
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebPage {
    /// Page URL
    pub url: Option<String>,
    /// Relevancy score
    pub score: Option<f64>,
    /// Page title
    pub page_title: Option<String>,
    /// Fully matching images on the page
    pub full_matching_images: Vec<WebImage>,
    /// Partially matching images on the page
    pub partial_matching_images: Vec<WebImage>,
}

/// A best-guess label for the image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebLabel {
    /// Label text
    pub label: Option<String>,
    /// BCP-47 language of the label
    pub language_code: Option<String>,
}
