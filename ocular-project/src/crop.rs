//! Crop hint projection

use crate::error::Result;
use crate::leaf::poly_record;
use crate::record::{float, project_nested, set_if_requested, Record};
use ocular_schema::RecordSchema;
use ocular_vision::{AnnotateResponse, CropHint};

/// The crop hint list inside a response, empty when the annotation is absent
pub fn crop_hints(response: &AnnotateResponse) -> &[CropHint] {
    response
        .crop_hints_annotation
        .as_ref()
        .map(|a| a.crop_hints.as_slice())
        .unwrap_or(&[])
}

/// Project one crop hint
pub fn crop_record(hint: &CropHint, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "boundingPoly", |fs| {
        project_nested(hint.bounding_poly.as_ref(), fs, "boundingPoly", poly_record)
    })?;
    set_if_requested(&mut out, schema, "confidence", |_| Ok(float(hint.confidence)))?;
    set_if_requested(&mut out, schema, "importanceFraction", |_| {
        Ok(float(hint.importance_fraction))
    })?;
    Ok(out)
}
