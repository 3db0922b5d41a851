//! Error types for the projection engine

use ocular_schema::SchemaError;
use thiserror::Error;

/// Projection error types
///
/// Schema errors surface at stage configuration and abort it; the other
/// variants are per-record, routed to the error channel without stopping
/// the batch.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The annotation service reported a per-item failure inside the response.
    #[error("Annotation service error: {0}")]
    Upstream(String),
    /// A schema node had the wrong shape while walking the result tree.
    /// Unreachable after configuration-time validation.
    #[error("Field {field} requires {expected}")]
    Shape {
        /// Field being projected
        field: String,
        /// Required schema shape
        expected: &'static str,
    },
    /// Stage configuration failed.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ProjectError>;
