//! Product search annotations

use crate::geometry::BoundingPoly;
use serde::{Deserialize, Serialize};

/// Results of a product search over an image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductSearchResults {
    /// Index refresh time, RFC3339
    pub index_time: Option<String>,
    /// Matches across the whole image
    pub results: Vec<ProductResult>,
    /// Matches grouped by detected region
    pub product_grouped_results: Vec<GroupedResult>,
}

/// A single product match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductResult {
    /// The matched product
    pub product: Option<Product>,
    /// Match confidence
    pub score: Option<f64>,
    /// Resource name of the matched catalog image
    pub image: Option<String>,
}

/// A catalog product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    /// Resource name
    pub name: Option<String>,
    /// Display name
    pub display_name: Option<String>,
    /// Free-form description
    pub description: Option<String>,
    /// Product category
    pub product_category: Option<String>,
    /// Key-value product labels
    pub product_labels: Vec<ProductLabel>,
}

/// A key-value label on a catalog product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductLabel {
    /// Label key
    pub key: Option<String>,
    /// Label value
    pub value: Option<String>,
}

/// Product matches within one detected region
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupedResult {
    /// Region the group refers to
    pub bounding_poly: Option<BoundingPoly>,
    /// Matches for the region
    pub results: Vec<ProductResult>,
}
