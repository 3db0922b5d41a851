//! Ocular Schema - Output schema primitives for annotation projection
//!
//! This crate provides the schema model and helpers used by the projection
//! engine, with no I/O dependencies. It includes:
//!
//! - The output schema model (records, arrays, nullables, primitives)
//! - JSON parsing and printing of schemas
//! - Navigation helpers (field resolution, nullable/element unwrapping)
//! - The feature catalog (the fixed set of annotation variants)
//! - Full-shape inference per feature
//! - Configured-schema validation against the inferred shape
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod feature;
pub mod infer;
pub mod parse;
pub mod schema;
pub mod validate;

// Re-export commonly used types
pub use error::{Result, SchemaError};
pub use feature::Feature;
pub use infer::{annotation_schema, output_schema};
pub use schema::{
    element_record, require_element_record, require_record, Field, RecordSchema, Schema,
};
pub use validate::validate_output_schema;
