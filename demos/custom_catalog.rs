use scrivener::{DocumentPipeline, DocumentType, FieldValues, PipelineError, YearPolicy};

/// A replacement catalog carrying a single reworded report form. `{year}` is
/// derived by the assembler; every other placeholder must be a required field.
const CATALOG: &str = r#"{
    "report": {
        "title": "Daily Situation Report",
        "requiredFields": ["station", "content", "issueDate"],
        "paragraphs": [
            "DAILY SITUATION REPORT\n\nStation: {station}",
            "{content}",
            "Dated this {issueDate} day of {year}."
        ]
    }
}"#;

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    println!("Running Custom Catalog Example...");

    // 1. Build a pipeline over the custom catalog. The catalog is validated
    // here; a stray placeholder would be rejected before any assembly.
    let pipeline = DocumentPipeline::builder()
        .with_catalog_json(CATALOG)?
        .with_year_policy(YearPolicy::FromIssueDate)
        .build()?;
    println!("✓ Catalog loaded and validated.");

    // 2. Assemble a report against the new form.
    let fields = FieldValues::new()
        .with("station", "Fort Police Station")
        .with("content", "All quiet on the waterfront. Two carts detained for inspection.")
        .with("issueDate", "14th August 1947");
    let document = pipeline.assemble(DocumentType::Report, &fields)?;

    println!("\n--- {} ---", document.filename);
    println!("{}", pipeline.render_text(&document)?);

    // 3. Round trip: render the PDF, then recover its text as a preview.
    let pdf = pipeline.render_pdf(&document)?;
    let preview = pipeline.preview_text(&pdf)?;
    println!("--- preview extracted from the PDF ---");
    println!("{preview}");
    Ok(())
}
