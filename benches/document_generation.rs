//! Assembly and PDF generation benchmarks.
//!
//! Measures template resolution on its own and the full field-data-to-PDF
//! path at increasing document sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use scrivener::{DocumentPipeline, DocumentType, FieldValues};

fn witness_warrant_fields() -> FieldValues {
    FieldValues::new()
        .with("officerName", "Inspector Sharma of the Fort Station")
        .with("complaintPerson", "Nanavati Shaw")
        .with("complaintAddress", "12 Marine Lines")
        .with("offence", "theft")
        .with("witnessName", "Homi Daruwalla")
        .with("witnessDescription", "shopkeeper of Grant Road")
        .with("arrestDate", "10th April")
        .with("issueDate", "7th April")
}

fn benchmark_assembly(c: &mut Criterion) {
    let pipeline = DocumentPipeline::with_defaults();
    let fields = witness_warrant_fields();

    c.bench_function("assemble_witness_warrant", |b| {
        b.iter(|| {
            pipeline
                .assemble(DocumentType::WitnessWarrant, &fields)
                .expect("assembly failed")
        })
    });
}

fn benchmark_pdf_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("pdf_generation");
    let pipeline = DocumentPipeline::with_defaults();

    for line_count in [10usize, 100, 1000] {
        let body = "The witness repeated the same account without variation.\n".repeat(line_count);
        let fields = FieldValues::new().with("content", body.trim_end());

        group.bench_with_input(
            BenchmarkId::new("report_lines", line_count),
            &line_count,
            |b, _| {
                b.iter(|| {
                    pipeline
                        .generate_pdf(DocumentType::Report, &fields)
                        .expect("PDF generation failed")
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_assembly, benchmark_pdf_generation);
criterion_main!(benches);
