use scrivener::{DocumentPipeline, DocumentType, FieldValues, PipelineError};

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    println!("Running Report Example...");

    // 1. A free-form report is one paragraph of caller-supplied content.
    // Hard line breaks inside the value are kept in both output formats.
    let content = "On the night of the 14th instant, the undersigned visited the premises \
                   at 4 Cotton Exchange Lane in the company of two constables.\n\n\
                   The godown was found locked and the seals placed on the 9th instant \
                   were intact. The watchman on duty produced his register, which was in \
                   order.\n\n\
                   Nothing further to report.";
    let fields = FieldValues::new().with("content", content);
    println!("✓ Fields collected.");

    // 2. Build the pipeline over the built-in catalog.
    let pipeline = DocumentPipeline::with_defaults();
    println!("✓ Pipeline built.");

    // 3. Write the PDF and a plain-text rendition next to it.
    let pdf_path = pipeline.generate_pdf_file(DocumentType::Report, &fields, ".")?;
    let text_path = pipeline.generate_text_file(DocumentType::Report, &fields, ".")?;

    println!("\nSuccess! Generated {}", pdf_path.display());
    println!("         and       {}", text_path.display());
    Ok(())
}
