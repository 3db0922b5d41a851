//! OCR text projection
//!
//! Text detection returns entity annotations; the projected shape keeps
//! the locale, the recognized text, and the region it came from.

use crate::error::Result;
use crate::leaf::poly_record;
use crate::record::{project_nested, set_if_requested, string, Record};
use ocular_schema::RecordSchema;
use ocular_vision::EntityAnnotation;

/// Project one OCR text block
pub fn text_record(entity: &EntityAnnotation, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "locale", |_| {
        Ok(string(entity.locale.as_deref()))
    })?;
    set_if_requested(&mut out, schema, "description", |_| {
        Ok(string(entity.description.as_deref()))
    })?;
    set_if_requested(&mut out, schema, "boundingPoly", |fs| {
        project_nested(entity.bounding_poly.as_ref(), fs, "boundingPoly", poly_record)
    })?;
    Ok(out)
}
