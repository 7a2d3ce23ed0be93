use itertools::Itertools;
use scrivener::{DocumentPipeline, DocumentType, FieldValues, PipelineError, Registry};
use std::env;
use std::fs;
use std::process;

fn print_usage(program: &str) {
    let registry = Registry::builtin();
    eprintln!("Generate court documents as PDF files from JSON field data.");
    eprintln!();
    eprintln!("Usage: {program} <document-type> <path/to/fields.json> <output-dir> [--text]");
    eprintln!();
    eprintln!("Document types and their fields:");
    for document_type in registry.document_types() {
        if let Ok(definition) = registry.get(document_type) {
            eprintln!(
                "  {:<36} {}",
                document_type.id(),
                definition.required_fields().iter().join(", ")
            );
        }
    }
    eprintln!();
    eprintln!("The PDF is written into <output-dir> under the document's suggested");
    eprintln!("filename. With --text, a plain-text rendition is written next to it.");
}

/// A small CLI over the document pipeline.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 || args.len() > 5 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let document_type = match args[1].parse::<DocumentType>() {
        Ok(document_type) => document_type,
        Err(e) => {
            eprintln!("{e}");
            eprintln!();
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    let write_text = match args.get(4).map(String::as_str) {
        None => false,
        Some("--text") => true,
        Some(other) => {
            eprintln!("unknown option: {other}");
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    println!("Loading fields from {}", args[2]);
    let fields_json = fs::read_to_string(&args[2])?;
    let fields: FieldValues = serde_json::from_str(&fields_json)?;

    let pipeline = DocumentPipeline::with_defaults();
    let pdf_path = pipeline.generate_pdf_file(document_type, &fields, &args[3])?;
    println!("Successfully generated {}", pdf_path.display());

    if write_text {
        let text_path = pipeline.generate_text_file(document_type, &fields, &args[3])?;
        println!("Successfully generated {}", text_path.display());
    }

    Ok(())
}
