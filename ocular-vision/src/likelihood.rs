//! Likelihood buckets

use serde::{Deserialize, Serialize};

/// Bucketed likelihood reported by the annotation service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Likelihood {
    /// Likelihood unknown
    #[default]
    Unknown,
    /// Very unlikely
    VeryUnlikely,
    /// Unlikely
    Unlikely,
    /// Possible
    Possible,
    /// Likely
    Likely,
    /// Very likely
    VeryLikely,
}

impl Likelihood {
    /// Wire-format name, as projected into output records
    pub fn as_str(&self) -> &'static str {
        match self {
            Likelihood::Unknown => "UNKNOWN",
            Likelihood::VeryUnlikely => "VERY_UNLIKELY",
            Likelihood::Unlikely => "UNLIKELY",
            Likelihood::Possible => "POSSIBLE",
            Likelihood::Likely => "LIKELY",
            Likelihood::VeryLikely => "VERY_LIKELY",
        }
    }
}
