use scrivener::{DocumentPipeline, DocumentType, FieldValues, PipelineError};

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    println!("Running Witness Warrant Example...");

    // 1. Collect the field values the warrant form requires.
    let fields = FieldValues::new()
        .with("officerName", "Inspector Sharma of the Fort Station")
        .with("complaintPerson", "Nanavati Shaw")
        .with("complaintAddress", "12 Marine Lines")
        .with("offence", "theft")
        .with("witnessName", "Homi Daruwalla")
        .with("witnessDescription", "shopkeeper of Grant Road")
        .with("arrestDate", "10th April")
        .with("issueDate", "7th April");
    println!("✓ Fields collected.");

    // 2. Build the pipeline over the built-in catalog.
    let pipeline = DocumentPipeline::with_defaults();
    println!("✓ Pipeline built.");

    // 3. Assemble the warrant and write it under its suggested filename.
    let path = pipeline.generate_pdf_file(DocumentType::WitnessWarrant, &fields, ".")?;

    println!("\nSuccess! Generated {}", path.display());
    Ok(())
}
