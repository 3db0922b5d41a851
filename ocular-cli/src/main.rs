//! Ocular CLI - Project stored annotation responses against output schemas
//!
//! This binary provides command-line interfaces for:
//! - project: apply a projection stage to an NDJSON file of stored responses
//! - schema: print the inferred full output schema for a feature
//! - validate: check a configured schema against a feature's full shape

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use ocular_project::{Feature, Record, Stage, ERROR_FIELD, PATH_FIELD};
use ocular_schema::{output_schema, validate_output_schema, Field, RecordSchema, Schema};
use ocular_vision::AnnotateResponse;
use serde_json::Value;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Field of each input line holding the stored annotation response
const RESPONSE_FIELD: &str = "response";

#[derive(Parser)]
#[command(name = "ocular")]
#[command(about = "Schema-driven projection of annotation results")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project an NDJSON file of records with stored responses
    ///
    /// Each input line is a JSON object carrying pipeline fields plus a
    /// "response" object with the stored annotation service reply.
    Project {
        /// Input file (NDJSON)
        input: PathBuf,
        /// Output file for the success channel (NDJSON)
        #[arg(short, long)]
        output: PathBuf,
        /// Feature identifier, e.g. LABEL_DETECTION
        #[arg(short, long)]
        feature: String,
        /// Output field to hold the projected annotation
        #[arg(short = 'F', long)]
        field: String,
        /// Output schema file (JSON). Inferred from the first record when omitted
        #[arg(short, long)]
        schema: Option<PathBuf>,
        /// Error-channel file (NDJSON). Defaults to stderr
        #[arg(short, long)]
        errors: Option<PathBuf>,
        /// Show progress spinner while projecting
        #[arg(long)]
        progress: bool,
    },
    /// Print the inferred full output schema for a feature
    Schema {
        /// Feature identifier, e.g. LABEL_DETECTION
        #[arg(short, long)]
        feature: String,
        /// Output field to hold the projected annotation
        #[arg(short = 'F', long)]
        field: String,
        /// Input record schema file (JSON); defaults to a single path field
        #[arg(long)]
        input_schema: Option<PathBuf>,
    },
    /// Validate a configured schema against a feature's full shape
    Validate {
        /// Feature identifier, e.g. LABEL_DETECTION
        #[arg(short, long)]
        feature: String,
        /// Output field to hold the projected annotation
        #[arg(short = 'F', long)]
        field: String,
        /// Output schema file (JSON)
        #[arg(short, long)]
        schema: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Project {
            input,
            output,
            feature,
            field,
            schema,
            errors,
            progress,
        } => handle_project(input, output, feature, field, schema, errors, progress),
        Commands::Schema {
            feature,
            field,
            input_schema,
        } => handle_schema(feature, field, input_schema),
        Commands::Validate {
            feature,
            field,
            schema,
        } => handle_validate(feature, field, schema),
    }
}

fn handle_project(
    input: PathBuf,
    output: PathBuf,
    feature: String,
    field: String,
    schema: Option<PathBuf>,
    errors: Option<PathBuf>,
    show_progress: bool,
) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();
    let feature: Feature = feature.parse()?;

    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
        pb.set_message("reading input");
        Some(pb)
    } else {
        None
    };

    // Split each line into the pipeline record and its stored response.
    // Lines that fail to parse become error records up front.
    let mut items: Vec<(Record, AnnotateResponse)> = Vec::new();
    let mut failed: Vec<Record> = Vec::new();
    for line in BufReader::new(File::open(&input)?).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match split_line(&line) {
            Ok(item) => items.push(item),
            Err(message) => failed.push(bare_error_record(&message)),
        }
    }

    let stage = match &schema {
        Some(path) => Stage::new(feature, &field, read_schema(path)?)?,
        None => {
            let input_schema = infer_input_schema(items.first().map(|(record, _)| record));
            Stage::with_inferred(feature, &field, &input_schema)?
        }
    };

    if let Some(pb) = &spinner {
        pb.set_message(format!("projecting {} records", items.len()));
    }
    let (emitted, mut errored) = stage.process_batch(&items);
    failed.append(&mut errored);

    let mut out = BufWriter::new(File::create(&output)?);
    for record in &emitted {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    match &errors {
        Some(path) => {
            let mut err_out = BufWriter::new(File::create(path)?);
            for record in &failed {
                serde_json::to_writer(&mut err_out, record)?;
                err_out.write_all(b"\n")?;
            }
            err_out.flush()?;
        }
        None => {
            for record in &failed {
                eprintln!("{}", serde_json::to_string(record)?);
            }
        }
    }

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    eprintln!(
        "projected {} records, {} errors in {:.2?}",
        emitted.len(),
        failed.len(),
        start.elapsed()
    );
    Ok(())
}

fn handle_schema(
    feature: String,
    field: String,
    input_schema: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let feature: Feature = feature.parse()?;
    let input = match input_schema {
        Some(path) => read_schema(&path)?,
        None => default_input_schema(),
    };
    let schema = output_schema(feature, &field, &input);
    println!(
        "{}",
        serde_json::to_string_pretty(&Schema::Record(schema).to_json())?
    );
    Ok(())
}

fn handle_validate(feature: String, field: String, schema: PathBuf) -> Result<(), Box<dyn Error>> {
    let feature: Feature = feature.parse()?;
    let configured = read_schema(&schema)?;
    validate_output_schema(&configured, feature, &field)?;
    println!("schema is valid for {feature}");
    Ok(())
}

fn read_schema(path: &Path) -> Result<RecordSchema, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(RecordSchema::parse(&text)?)
}

fn default_input_schema() -> RecordSchema {
    RecordSchema::new(
        "Input",
        vec![Field::new(PATH_FIELD, Schema::nullable(Schema::String))],
    )
}

fn split_line(line: &str) -> Result<(Record, AnnotateResponse), String> {
    let value: Value = serde_json::from_str(line).map_err(|e| format!("invalid JSON: {e}"))?;
    let Value::Object(mut record) = value else {
        return Err("input line must be a JSON object".to_string());
    };
    let response = record
        .remove(RESPONSE_FIELD)
        .ok_or_else(|| format!("input line missing \"{RESPONSE_FIELD}\" field"))?;
    let response: AnnotateResponse =
        serde_json::from_value(response).map_err(|e| format!("invalid response: {e}"))?;
    Ok((record, response))
}

fn bare_error_record(message: &str) -> Record {
    let mut out = Record::new();
    out.insert(PATH_FIELD.to_string(), Value::Null);
    out.insert(ERROR_FIELD.to_string(), Value::String(message.to_string()));
    out
}

// Pass-through fields are typed from the first record's JSON scalars.
fn infer_input_schema(first: Option<&Record>) -> RecordSchema {
    let Some(record) = first else {
        return default_input_schema();
    };
    let fields = record
        .iter()
        .map(|(name, value)| {
            let schema = match value {
                Value::Bool(_) => Schema::Boolean,
                Value::Number(n) if n.is_i64() => Schema::Long,
                Value::Number(_) => Schema::Double,
                _ => Schema::String,
            };
            Field::new(name, Schema::nullable(schema))
        })
        .collect();
    RecordSchema::new("Input", fields)
}
