//! Ocular Project - The schema-driven projection engine
//!
//! This crate turns annotation responses into records shaped exactly by a
//! user-chosen output schema:
//!
//! - Record building primitives (the "set iff requested" rule)
//! - Leaf extractors for shared sub-records
//! - One projection module per annotation variant
//! - The dispatch factory over the closed feature catalog
//! - Record assembly and the per-stage driver with its error channel
//!
//! The engine is synchronous and stateless per call: a configured
//! [`Stage`] (or bare [`Projector`]) holds only read-only schemas and may
//! be shared freely across threads.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod color;
pub mod crop;
pub mod document;
pub mod entity;
pub mod error;
pub mod face;
pub mod factory;
pub mod leaf;
pub mod object;
pub mod product;
pub mod projector;
pub mod record;
pub mod safe;
pub mod stage;
pub mod text;
pub mod web;

// Re-export commonly used types
pub use error::{ProjectError, Result};
pub use factory::projector_for;
pub use projector::{ListProjector, Projector, RecordProjector};
pub use record::{assemble, project_list, project_nested, set_if_requested, Record};
pub use stage::{Stage, ERROR_FIELD, PATH_FIELD};

// Re-export the configuration-facing types from the sibling crates
pub use ocular_schema::{Feature, RecordSchema, Schema, SchemaError};
pub use ocular_vision::AnnotateResponse;
