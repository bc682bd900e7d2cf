//! Benchmarks for quotebom pipeline performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic quote text with the tokenization
//! artifacts real PDF extraction produces.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quotebom::{HeaderExtractor, LineItemExtractor, TextNormalizer};

/// Creates synthetic quote text with the given number of line items.
fn create_quote_text(item_count: usize) -> String {
    let mut content = String::new();

    content.push_str("Quo tation\n");
    content.push_str("Quote Number Q - 2026 - 0042\n");
    content.push_str("Quote Date January 30, 2 026\n");
    content.push_str("Customer Name Acme Research Labs Partner Name Summit Channel\n");
    content.push_str("Prepared By Jane Smith jsmith @ vendor.example\n");
    content.push_str("V5000 Configuration\nPART NO. DESCRIPTION QTY\n");

    for i in 0..item_count {
        match i % 3 {
            0 => content.push_str(
                "VDP - VDURACare - 10 - HP VDURACare Sub scription 21 60 $ 500.00 $ 90.00 $ 113,400.00\n",
            ),
            1 => content.push_str(&format!(
                "SVC - R1 - UNIT{i} Deployment Service {} $ 15,180.00 $ 7,590.00 $ 7,590.00\n",
                i + 1
            )),
            _ => content.push_str(&format!(
                "HW - CHASSIS - U{i} Storage Chassis {} $ 2,000.00 $ 1,500.00 $ 6,000.00\n",
                i + 1
            )),
        }
    }

    content.push_str("Total Software\n");
    content
}

/// Benchmark text normalization at various sizes.
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let normalizer = TextNormalizer::default();

    for item_count in [5, 25, 100].iter() {
        let text = create_quote_text(*item_count);
        group.bench_function(format!("{}_items", item_count), |b| {
            b.iter(|| normalizer.normalize(black_box(&text)));
        });
    }

    group.finish();
}

/// Benchmark extraction over already-normalized text.
fn bench_extract(c: &mut Criterion) {
    let normalizer = TextNormalizer::default();
    let text = normalizer.normalize(&create_quote_text(25));

    let header_extractor = HeaderExtractor::new();
    c.bench_function("extract_header", |b| {
        b.iter(|| header_extractor.extract(black_box(&text)));
    });

    let item_extractor = LineItemExtractor::new();
    c.bench_function("extract_items_25", |b| {
        b.iter(|| item_extractor.extract(black_box(&text)));
    });
}

/// Benchmark the full pipeline including CSV projection.
fn bench_full_pipeline(c: &mut Criterion) {
    let text = create_quote_text(25);

    c.bench_function("process_to_csv", |b| {
        b.iter(|| quotebom::to_csv(black_box(&text), black_box("006XXXXXXXXXXXXXXX")));
    });
}

criterion_group!(benches, bench_normalize, bench_extract, bench_full_pipeline);
criterion_main!(benches);
