//! Dispatch factory
//!
//! Maps a feature to its projector. The match is exhaustive over the
//! closed feature catalog: an unrecognized identifier never reaches this
//! point, it is rejected when the raw string is parsed into [`Feature`].

use crate::projector::{ListProjector, Projector, RecordProjector};
use crate::{color, crop, document, entity, face, object, product, safe, text, web};
use ocular_schema::{Feature, RecordSchema, SchemaError};

/// Build the projector for a feature, resolving its narrowed schema once
///
/// Called at stage configuration, not per record. Fails when the output
/// field is missing from the schema or has the wrong shape for the
/// variant.
pub fn projector_for(
    feature: Feature,
    output_field: &str,
    schema: &RecordSchema,
) -> Result<Box<dyn Projector>, SchemaError> {
    Ok(match feature {
        Feature::Face => Box::new(ListProjector::new(
            output_field,
            schema,
            |r| r.face_annotations.as_slice(),
            face::face_record,
        )?),
        Feature::Text => Box::new(ListProjector::new(
            output_field,
            schema,
            |r| r.text_annotations.as_slice(),
            text::text_record,
        )?),
        Feature::DocumentText => Box::new(RecordProjector::new(
            output_field,
            schema,
            |r| r.full_text_annotation.as_ref(),
            document::document_record,
        )?),
        Feature::CropHints => Box::new(ListProjector::new(
            output_field,
            schema,
            crop::crop_hints,
            crop::crop_record,
        )?),
        Feature::ImageProperties => Box::new(ListProjector::new(
            output_field,
            schema,
            color::dominant_colors,
            color::color_info_record,
        )?),
        Feature::Label => Box::new(ListProjector::new(
            output_field,
            schema,
            |r| r.label_annotations.as_slice(),
            entity::entity_record,
        )?),
        Feature::Landmark => Box::new(ListProjector::new(
            output_field,
            schema,
            |r| r.landmark_annotations.as_slice(),
            entity::located_entity_record,
        )?),
        Feature::Logo => Box::new(ListProjector::new(
            output_field,
            schema,
            |r| r.logo_annotations.as_slice(),
            entity::located_entity_record,
        )?),
        Feature::Object => Box::new(ListProjector::new(
            output_field,
            schema,
            |r| r.localized_object_annotations.as_slice(),
            object::object_record,
        )?),
        Feature::SafeSearch => Box::new(RecordProjector::new(
            output_field,
            schema,
            |r| r.safe_search_annotation.as_ref(),
            safe::safe_search_record,
        )?),
        Feature::Web => Box::new(RecordProjector::new(
            output_field,
            schema,
            |r| r.web_detection.as_ref(),
            web::web_record,
        )?),
        Feature::ProductSearch => Box::new(RecordProjector::new(
            output_field,
            schema,
            |r| r.product_search_results.as_ref(),
            product::product_search_record,
        )?),
    })
}
