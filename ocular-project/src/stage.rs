//! The per-stage driver
//!
//! A stage is configured once (feature, output field, output schema) and
//! then applied to any number of records. Configuration failures abort
//! stage construction; per-record failures become error-channel records
//! and never stop the batch.

use crate::error::ProjectError;
use crate::factory::projector_for;
use crate::projector::Projector;
use crate::record::Record;
use ocular_schema::{output_schema, validate_output_schema, Feature, RecordSchema, SchemaError};
use ocular_vision::AnnotateResponse;
use rayon::prelude::*;
use serde_json::Value;

/// Name of the input field carried into error-channel records
pub const PATH_FIELD: &str = "path";

/// Name of the message field in error-channel records
pub const ERROR_FIELD: &str = "error";

/// A configured projection stage
pub struct Stage {
    feature: Feature,
    schema: RecordSchema,
    projector: Box<dyn Projector>,
}

impl Stage {
    /// Configure a stage with an operator-supplied output schema
    ///
    /// Validates the schema against the feature's full shape and resolves
    /// the projector's narrowed schema, so per-record work never revisits
    /// configuration errors.
    pub fn new(
        feature: Feature,
        output_field: &str,
        schema: RecordSchema,
    ) -> Result<Self, SchemaError> {
        validate_output_schema(&schema, feature, output_field)?;
        let projector = projector_for(feature, output_field, &schema)?;
        Ok(Self {
            feature,
            schema,
            projector,
        })
    }

    /// Configure a stage with the schema inferred from the feature's full
    /// shape plus pass-through of the input fields
    pub fn with_inferred(
        feature: Feature,
        output_field: &str,
        input_schema: &RecordSchema,
    ) -> Result<Self, SchemaError> {
        Self::new(
            feature,
            output_field,
            output_schema(feature, output_field, input_schema),
        )
    }

    /// The stage's feature
    pub fn feature(&self) -> Feature {
        self.feature
    }

    /// The designated output field
    pub fn output_field(&self) -> &str {
        self.projector.output_field()
    }

    /// The stage's full output schema
    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    /// Project one record
    pub fn process(
        &self,
        input: &Record,
        response: &AnnotateResponse,
    ) -> Result<Record, ProjectError> {
        self.projector.project(input, response)
    }

    /// Build the error-channel record for a failed item
    pub fn error_record(input: &Record, error: &ProjectError) -> Record {
        let mut out = Record::new();
        out.insert(
            PATH_FIELD.to_string(),
            input.get(PATH_FIELD).cloned().unwrap_or(Value::Null),
        );
        out.insert(ERROR_FIELD.to_string(), Value::String(error.to_string()));
        out
    }

    /// Project a batch in parallel, splitting success and error channels
    ///
    /// The stage holds no mutable state, so the same instance serves all
    /// rayon workers. Order within each channel follows input order.
    pub fn process_batch(&self, items: &[(Record, AnnotateResponse)]) -> (Vec<Record>, Vec<Record>) {
        let results: Vec<Result<Record, Record>> = items
            .par_iter()
            .map(|(input, response)| {
                self.process(input, response)
                    .map_err(|error| Self::error_record(input, &error))
            })
            .collect();

        let mut emitted = Vec::with_capacity(results.len());
        let mut failed = Vec::new();
        for result in results {
            match result {
                Ok(record) => emitted.push(record),
                Err(record) => failed.push(record),
            }
        }
        (emitted, failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocular_schema::{Field, Schema};
    use serde_json::json;

    fn input_schema() -> RecordSchema {
        RecordSchema::new(
            "Input",
            vec![Field::new("path", Schema::nullable(Schema::String))],
        )
    }

    fn input(path: &str) -> Record {
        let mut record = Record::new();
        record.insert(PATH_FIELD.to_string(), json!(path));
        record
    }

    #[test]
    fn test_upstream_error_routes_to_error_record() {
        let stage = Stage::with_inferred(Feature::Label, "labels", &input_schema()).unwrap();
        let response: AnnotateResponse =
            serde_json::from_value(json!({"error": {"message": "no image data"}})).unwrap();
        let record = input("gs://b/broken.jpg");
        let error = stage.process(&record, &response).unwrap_err();
        let out = Stage::error_record(&record, &error);
        assert_eq!(out.get("path"), Some(&json!("gs://b/broken.jpg")));
        assert!(out["error"].as_str().unwrap().contains("no image data"));
    }

    #[test]
    fn test_batch_splits_channels() {
        let stage = Stage::with_inferred(Feature::Label, "labels", &input_schema()).unwrap();
        let good: AnnotateResponse = serde_json::from_value(json!({
            "labelAnnotations": [{"description": "cat", "score": 0.9}]
        }))
        .unwrap();
        let bad: AnnotateResponse =
            serde_json::from_value(json!({"error": {"message": "boom"}})).unwrap();
        let items = vec![
            (input("gs://b/1.jpg"), good.clone()),
            (input("gs://b/2.jpg"), bad),
            (input("gs://b/3.jpg"), good),
        ];
        let (emitted, failed) = stage.process_batch(&items);
        assert_eq!(emitted.len(), 2);
        assert_eq!(failed.len(), 1);
        assert_eq!(emitted[0].get("path"), Some(&json!("gs://b/1.jpg")));
        assert_eq!(emitted[1].get("path"), Some(&json!("gs://b/3.jpg")));
        assert_eq!(failed[0].get("path"), Some(&json!("gs://b/2.jpg")));
    }

    #[test]
    fn test_error_record_without_path() {
        let error = ProjectError::Upstream("boom".to_string());
        let out = Stage::error_record(&Record::new(), &error);
        assert_eq!(out.get("path"), Some(&Value::Null));
    }
}
