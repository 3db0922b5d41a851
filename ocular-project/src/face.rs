//! Face projection

use crate::error::Result;
use crate::leaf::{poly_record, position_fields};
use crate::record::{float, likelihood, project_list, project_nested, set_if_requested, string, Record};
use ocular_schema::RecordSchema;
use ocular_vision::{FaceAnnotation, FaceLandmark};

/// Project one detected face
pub fn face_record(face: &FaceAnnotation, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "joy", |_| Ok(likelihood(face.joy_likelihood)))?;
    set_if_requested(&mut out, schema, "sorrow", |_| {
        Ok(likelihood(face.sorrow_likelihood))
    })?;
    set_if_requested(&mut out, schema, "anger", |_| {
        Ok(likelihood(face.anger_likelihood))
    })?;
    set_if_requested(&mut out, schema, "surprise", |_| {
        Ok(likelihood(face.surprise_likelihood))
    })?;
    set_if_requested(&mut out, schema, "underExposed", |_| {
        Ok(likelihood(face.under_exposed_likelihood))
    })?;
    set_if_requested(&mut out, schema, "blurred", |_| {
        Ok(likelihood(face.blurred_likelihood))
    })?;
    set_if_requested(&mut out, schema, "headwear", |_| {
        Ok(likelihood(face.headwear_likelihood))
    })?;
    set_if_requested(&mut out, schema, "roll", |_| Ok(float(face.roll_angle)))?;
    set_if_requested(&mut out, schema, "pan", |_| Ok(float(face.pan_angle)))?;
    set_if_requested(&mut out, schema, "tilt", |_| Ok(float(face.tilt_angle)))?;
    set_if_requested(&mut out, schema, "detectionConfidence", |_| {
        Ok(float(face.detection_confidence))
    })?;
    set_if_requested(&mut out, schema, "landmarkingConfidence", |_| {
        Ok(float(face.landmarking_confidence))
    })?;
    set_if_requested(&mut out, schema, "boundingPoly", |fs| {
        project_nested(face.bounding_poly.as_ref(), fs, "boundingPoly", poly_record)
    })?;
    set_if_requested(&mut out, schema, "fdBoundingPoly", |fs| {
        project_nested(
            face.fd_bounding_poly.as_ref(),
            fs,
            "fdBoundingPoly",
            poly_record,
        )
    })?;
    set_if_requested(&mut out, schema, "landmarks", |fs| {
        project_list(&face.landmarks, fs, "landmarks", landmark_record)
    })?;
    Ok(out)
}

// The landmark's position is flattened into x/y/z alongside the type.
fn landmark_record(landmark: &FaceLandmark, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "type", |_| {
        Ok(string(landmark.kind.as_deref()))
    })?;
    position_fields(&mut out, schema, landmark.position.as_ref())?;
    Ok(out)
}
