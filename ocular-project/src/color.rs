//! Dominant color projection

use crate::error::Result;
use crate::leaf::color_record;
use crate::record::{float, project_nested, set_if_requested, Record};
use ocular_schema::RecordSchema;
use ocular_vision::{AnnotateResponse, ColorInfo};

/// The dominant color list inside a response, empty when the annotation is
/// absent
pub fn dominant_colors(response: &AnnotateResponse) -> &[ColorInfo] {
    response
        .image_properties_annotation
        .as_ref()
        .and_then(|p| p.dominant_colors.as_ref())
        .map(|d| d.colors.as_slice())
        .unwrap_or(&[])
}

/// Project one dominant color
pub fn color_info_record(info: &ColorInfo, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "color", |fs| {
        project_nested(info.color.as_ref(), fs, "color", color_record)
    })?;
    set_if_requested(&mut out, schema, "score", |_| Ok(float(info.score)))?;
    set_if_requested(&mut out, schema, "pixelFraction", |_| {
        Ok(float(info.pixel_fraction))
    })?;
    Ok(out)
}
