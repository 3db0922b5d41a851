//! Product search projection

use crate::error::Result;
use crate::leaf::poly_record;
use crate::record::{float, project_list, project_nested, set_if_requested, string, Record};
use ocular_schema::RecordSchema;
use ocular_vision::{GroupedResult, Product, ProductLabel, ProductResult, ProductSearchResults};

/// Project the product search annotation
pub fn product_search_record(
    results: &ProductSearchResults,
    schema: &RecordSchema,
) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "indexTime", |_| {
        Ok(string(results.index_time.as_deref()))
    })?;
    set_if_requested(&mut out, schema, "results", |fs| {
        project_list(&results.results, fs, "results", result_record)
    })?;
    set_if_requested(&mut out, schema, "groupedResults", |fs| {
        project_list(
            &results.product_grouped_results,
            fs,
            "groupedResults",
            grouped_record,
        )
    })?;
    Ok(out)
}

fn result_record(result: &ProductResult, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "product", |fs| {
        project_nested(result.product.as_ref(), fs, "product", product_record)
    })?;
    set_if_requested(&mut out, schema, "score", |_| Ok(float(result.score)))?;
    set_if_requested(&mut out, schema, "image", |_| {
        Ok(string(result.image.as_deref()))
    })?;
    Ok(out)
}

fn product_record(product: &Product, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "name", |_| Ok(string(product.name.as_deref())))?;
    set_if_requested(&mut out, schema, "displayName", |_| {
        Ok(string(product.display_name.as_deref()))
    })?;
    set_if_requested(&mut out, schema, "description", |_| {
        Ok(string(product.description.as_deref()))
    })?;
    set_if_requested(&mut out, schema, "category", |_| {
        Ok(string(product.product_category.as_deref()))
    })?;
    set_if_requested(&mut out, schema, "labels", |fs| {
        project_list(&product.product_labels, fs, "labels", label_record)
    })?;
    Ok(out)
}

fn label_record(label: &ProductLabel, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "key", |_| Ok(string(label.key.as_deref())))?;
    set_if_requested(&mut out, schema, "value", |_| Ok(string(label.value.as_deref())))?;
    Ok(out)
}

// The nested results list is gated on its own field name, not on a
// sibling's presence.
fn grouped_record(grouped: &GroupedResult, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "boundingPoly", |fs| {
        project_nested(grouped.bounding_poly.as_ref(), fs, "boundingPoly", poly_record)
    })?;
    set_if_requested(&mut out, schema, "results", |fs| {
        project_list(&grouped.results, fs, "results", result_record)
    })?;
    Ok(out)
}
