mod common;

use common::fixtures::*;
use common::TestResult;
use scrivener::extract::{self, ExtractError};
use scrivener::{DocumentPipeline, DocumentType, PipelineError};

#[test]
fn test_preview_recovers_generated_text() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pipeline = DocumentPipeline::with_defaults();
    let bytes = pipeline.generate_pdf(DocumentType::WitnessWarrant, &witness_warrant_fields())?;

    let preview = pipeline.preview_text(&bytes)?;
    let normalized = common::pdf_assertions::normalized(&preview);
    assert!(normalized.contains("WARRANT TO BRING UP A WITNESS"));
    assert!(normalized.contains("Nanavati Shaw of 12 Marine Lines"));
    Ok(())
}

#[test]
fn test_extraction_preserves_page_order() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pipeline = DocumentPipeline::with_defaults();
    let bytes = pipeline.generate_pdf(DocumentType::Report, &long_report_fields())?;

    let extracted = extract::extract_text(&bytes)?;
    assert!(extracted.page_count() >= 2);
    assert!(!extracted.is_blank());
    assert_eq!(extracted.pages.len(), extracted.page_count());
    for page in &extracted.pages {
        assert!(page.contains("witness repeated the same account"));
    }
    Ok(())
}

#[test]
fn test_preview_rejects_invalid_bytes() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let pipeline = DocumentPipeline::with_defaults();
    let err = pipeline.preview_text(b"this is not a pdf").unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Extract(ExtractError::InvalidPdf(_))
    ));
    Ok(())
}

#[test]
fn test_extraction_rejects_empty_input() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    assert!(matches!(
        extract::extract_text(&[]),
        Err(ExtractError::InvalidPdf(_))
    ));
    Ok(())
}
