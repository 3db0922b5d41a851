//! Full-document text projection
//!
//! Five structural levels, each independently schema-gated: a schema may
//! request pages without blocks, words without symbols, and so on.

use crate::error::Result;
use crate::leaf::languages_value;
use crate::record::{float, integer, project_list, set_if_requested, string, Record};
use ocular_schema::RecordSchema;
use ocular_vision::{Block, Page, Paragraph, Symbol, TextAnnotation, Word};

/// Project the document-wide annotation
pub fn document_record(document: &TextAnnotation, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "text", |_| {
        Ok(string(document.text.as_deref()))
    })?;
    set_if_requested(&mut out, schema, "pages", |fs| {
        project_list(&document.pages, fs, "pages", page_record)
    })?;
    Ok(out)
}

fn page_record(page: &Page, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "width", |_| Ok(integer(page.width)))?;
    set_if_requested(&mut out, schema, "height", |_| Ok(integer(page.height)))?;
    set_if_requested(&mut out, schema, "confidence", |_| Ok(float(page.confidence)))?;
    set_if_requested(&mut out, schema, "languages", |fs| {
        languages_value(page.property.as_ref(), fs)
    })?;
    set_if_requested(&mut out, schema, "blocks", |fs| {
        project_list(&page.blocks, fs, "blocks", block_record)
    })?;
    Ok(out)
}

fn block_record(block: &Block, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "type", |_| {
        Ok(string(block.block_type.as_deref()))
    })?;
    set_if_requested(&mut out, schema, "confidence", |_| Ok(float(block.confidence)))?;
    set_if_requested(&mut out, schema, "languages", |fs| {
        languages_value(block.property.as_ref(), fs)
    })?;
    set_if_requested(&mut out, schema, "paragraphs", |fs| {
        project_list(&block.paragraphs, fs, "paragraphs", paragraph_record)
    })?;
    Ok(out)
}

fn paragraph_record(paragraph: &Paragraph, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "confidence", |_| {
        Ok(float(paragraph.confidence))
    })?;
    set_if_requested(&mut out, schema, "languages", |fs| {
        languages_value(paragraph.property.as_ref(), fs)
    })?;
    set_if_requested(&mut out, schema, "words", |fs| {
        project_list(&paragraph.words, fs, "words", word_record)
    })?;
    Ok(out)
}

fn word_record(word: &Word, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "confidence", |_| Ok(float(word.confidence)))?;
    set_if_requested(&mut out, schema, "languages", |fs| {
        languages_value(word.property.as_ref(), fs)
    })?;
    set_if_requested(&mut out, schema, "symbols", |fs| {
        project_list(&word.symbols, fs, "symbols", symbol_record)
    })?;
    Ok(out)
}

fn symbol_record(symbol: &Symbol, schema: &RecordSchema) -> Result<Record> {
    let mut out = Record::new();
    set_if_requested(&mut out, schema, "text", |_| Ok(string(symbol.text.as_deref())))?;
    set_if_requested(&mut out, schema, "confidence", |_| Ok(float(symbol.confidence)))?;
    set_if_requested(&mut out, schema, "languages", |fs| {
        languages_value(symbol.property.as_ref(), fs)
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ocular_schema::{annotation_schema, Feature, RecordSchema};
    use serde_json::json;

    fn document() -> TextAnnotation {
        serde_json::from_value(json!({
            "text": "Hi",
            "pages": [{
                "width": 640,
                "height": 480,
                "confidence": 0.99,
                "property": {"detectedLanguages": [{"languageCode": "en", "confidence": 0.9}]},
                "blocks": [{
                    "blockType": "TEXT",
                    "paragraphs": [{
                        "words": [{"symbols": [{"text": "H"}, {"text": "i"}]}]
                    }]
                }]
            }]
        }))
        .unwrap()
    }

    fn full_schema() -> RecordSchema {
        annotation_schema(Feature::DocumentText)
            .unwrap_nullable()
            .as_record()
            .unwrap()
            .clone()
    }

    #[test]
    fn test_full_depth_projection() {
        let out = document_record(&document(), &full_schema()).unwrap();
        assert_eq!(out.get("text"), Some(&json!("Hi")));
        let symbols = &out["pages"][0]["blocks"][0]["paragraphs"][0]["words"][0]["symbols"];
        assert_eq!(symbols[1]["text"], json!("i"));
    }

    #[test]
    fn test_languages_from_level_property() {
        let out = document_record(&document(), &full_schema()).unwrap();
        assert_eq!(
            out["pages"][0]["languages"],
            json!([{"code": "en", "confidence": 0.9}])
        );
        // Levels without a property still project a requested language
        // list, as empty.
        assert_eq!(out["pages"][0]["blocks"][0]["languages"], json!([]));
    }

    #[test]
    fn test_depth_gating() {
        let schema = RecordSchema::parse(
            r#"{
                "type": "record", "name": "Document", "fields": [
                    {"name": "pages", "type": ["null", {"type": "array", "items": ["null", {
                        "type": "record", "name": "Page", "fields": [
                            {"name": "width", "type": ["null", "long"]}
                        ]
                    }]}]}
                ]
            }"#,
        )
        .unwrap();
        let out = document_record(&document(), &schema).unwrap();
        assert_eq!(
            serde_json::Value::Object(out),
            json!({"pages": [{"width": 640}]})
        );
    }
}
