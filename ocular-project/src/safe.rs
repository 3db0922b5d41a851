//! Safe-search projection

use crate::error::Result;
use crate::record::{likelihood, set_if_requested, Record};
use ocular_schema::RecordSchema;
use ocular_vision::SafeSearchAnnotation;

/// Project the safe-search verdict
pub fn safe_search_record(
    annotation: &SafeSearchAnnotation,
    schema: &RecordSchema,
) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "adult", |_| Ok(likelihood(annotation.adult)))?;
    set_if_requested(&mut out, schema, "spoof", |_| Ok(likelihood(annotation.spoof)))?;
    set_if_requested(&mut out, schema, "medical", |_| {
        Ok(likelihood(annotation.medical))
    })?;
    set_if_requested(&mut out, schema, "violence", |_| {
        Ok(likelihood(annotation.violence))
    })?;
    set_if_requested(&mut out, schema, "racy", |_| Ok(likelihood(annotation.racy)))?;
    Ok(out)
}
