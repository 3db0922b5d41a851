//! Safe-search annotations

use crate::likelihood::Likelihood;
use serde::{Deserialize, Serialize};

/// Safe-search likelihood buckets for an image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SafeSearchAnnotation {
    /// Adult content likelihood
    pub adult: Option<Likelihood>,
    /// Spoofed-image likelihood
    pub spoof: Option<Likelihood>,
    /// Medical-image likelihood
    pub medical: Option<Likelihood>,
    /// Violent content likelihood
    pub violence: Option<Likelihood>,
    /// Racy content likelihood
    pub racy: Option<Likelihood>,
}
