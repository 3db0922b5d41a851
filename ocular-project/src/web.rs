//! Web detection projection

use crate::error::Result;
use crate::record::{float, project_list, set_if_requested, string, Record};
use ocular_schema::RecordSchema;
use ocular_vision::{WebDetection, WebEntity, WebImage, WebLabel, WebPage};

/// Project the web detection annotation
pub fn web_record(detection: &WebDetection, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "entities", |fs| {
        project_list(&detection.web_entities, fs, "entities", entity_record)
    })?;
    set_if_requested(&mut out, schema, "fullMatchingImages", |fs| {
        project_list(
            &detection.full_matching_images,
            fs,
            "fullMatchingImages",
            image_record,
        )
    })?;
    set_if_requested(&mut out, schema, "partialMatchingImages", |fs| {
        project_list(
            &detection.partial_matching_images,
            fs,
            "partialMatchingImages",
            image_record,
        )
    })?;
    set_if_requested(&mut out, schema, "visuallySimilarImages", |fs| {
        project_list(
            &detection.visually_similar_images,
            fs,
            "visuallySimilarImages",
            image_record,
        )
    })?;
    set_if_requested(&mut out, schema, "pages", |fs| {
        project_list(&detection.pages_with_matching_images, fs, "pages", page_record)
    })?;
    set_if_requested(&mut out, schema, "bestGuessLabels", |fs| {
        project_list(&detection.best_guess_labels, fs, "bestGuessLabels", label_record)
    })?;
    Ok(out)
}

fn entity_record(entity: &WebEntity, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "id", |_| {
        Ok(string(entity.entity_id.as_deref()))
    })?;
    set_if_requested(&mut out, schema, "score", |_| Ok(float(entity.score)))?;
    set_if_requested(&mut out, schema, "description", |_| {
        Ok(string(entity.description.as_deref()))
    })?;
    Ok(out)
}

fn image_record(image: &WebImage, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "url", |_| Ok(string(image.url.as_deref())))?;
    set_if_requested(&mut out, schema, "score", |_| Ok(float(image.score)))?;
    Ok(out)
}

// Pages nest the same image record shape again.
fn page_record(page: &WebPage, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "url", |_| Ok(string(page.url.as_deref())))?;
    set_if_requested(&mut out, schema, "score", |_| Ok(float(page.score)))?;
    set_if_requested(&mut out, schema, "title", |_| {
        Ok(string(page.page_title.as_deref()))
    })?;
    set_if_requested(&mut out, schema, "fullMatchingImages", |fs| {
        project_list(
            &page.full_matching_images,
            fs,
            "fullMatchingImages",
            image_record,
        )
    })?;
    set_if_requested(&mut out, schema, "partialMatchingImages", |fs| {
        project_list(
            &page.partial_matching_images,
            fs,
            "partialMatchingImages",
            image_record,
        )
    })?;
    Ok(out)
}

fn label_record(label: &WebLabel, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "label", |_| Ok(string(label.label.as_deref())))?;
    set_if_requested(&mut out, schema, "language", |_| {
        Ok(string(label.language_code.as_deref()))
    })?;
    Ok(out)
}
