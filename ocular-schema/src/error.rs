//! Error types for schema handling

use thiserror::Error;

/// Schema error types
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Schema JSON text could not be parsed.
    #[error("Invalid schema JSON: {0}")]
    InvalidJson(String),
    /// Schema JSON parsed but does not describe a supported schema shape.
    #[error("Malformed schema: {0}")]
    Malformed(String),
    /// Feature identifier is outside the fixed catalog.
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),
    /// The configured output field is not declared in the output schema.
    #[error("Output field not declared in schema: {0}")]
    MissingOutputField(String),
    /// The configured output field has the wrong top-level shape for its variant.
    #[error("Output field {field} must be {expected}")]
    BadOutputField {
        /// Output field name
        field: String,
        /// Expected shape, e.g. "an array of records"
        expected: String,
    },
    /// A configured field is incompatible with the variant's full shape.
    #[error("Schema mismatch at {field}: expected {expected}, found {found}")]
    Mismatch {
        /// Dotted path of the offending field
        field: String,
        /// Schema the full shape declares at that path
        expected: String,
        /// Schema the configured output schema declares
        found: String,
    },
    /// A configured field does not exist in the variant's full shape.
    #[error("Unknown field in output schema: {0}")]
    UnknownField(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SchemaError>;
