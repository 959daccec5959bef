//! Benchmarks for KPI calculation and report assembly
//!
//! Run with: cargo bench --bench kpi_calculation_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kgs_roi::{
    assemble_report, calculate_kpis, calculate_kpis_from_records, FinancialInputs,
    MonetizationModel, Source, SourcePerformance, SourceRecord,
};
use std::hint::black_box;

fn scaled_sources(scale: u64) -> Vec<SourcePerformance> {
    vec![
        SourcePerformance::new(Source::LinkedIn, 1000 * scale, 50 * scale, 20 * scale),
        SourcePerformance::new(Source::GoogleAds, 2000 * scale, 80 * scale, 30 * scale),
        SourcePerformance::new(Source::Website, 500 * scale, 25 * scale, 0),
    ]
}

fn bench_calculate_kpis(c: &mut Criterion) {
    let model = MonetizationModel::default();
    let financials = FinancialInputs::new(1000.0, 5000.0, 300.0).unwrap();

    let mut group = c.benchmark_group("calculate_kpis");
    for scale in [1u64, 1_000, 1_000_000] {
        let sources = scaled_sources(scale);
        group.bench_with_input(BenchmarkId::from_parameter(scale), &sources, |b, sources| {
            b.iter(|| calculate_kpis(black_box(&model), black_box(sources), black_box(&financials)))
        });
    }
    group.finish();
}

fn bench_from_records(c: &mut Criterion) {
    let model = MonetizationModel::default();
    let financials = FinancialInputs::new(1000.0, 5000.0, 300.0).unwrap();
    let records = vec![
        SourceRecord::new("linkedin", 1000, 50, 20),
        SourceRecord::new("google-ads", 2000, 80, 30),
        SourceRecord::new("Website", 500, 25, 0),
    ];

    c.bench_function("calculate_kpis_from_records", |b| {
        b.iter(|| {
            calculate_kpis_from_records(
                black_box(&model),
                black_box(&records),
                black_box(&financials),
            )
        })
    });
}

fn bench_assemble_report(c: &mut Criterion) {
    let model = MonetizationModel::default();
    let financials = FinancialInputs::new(1000.0, 5000.0, 300.0).unwrap();
    let kpis = calculate_kpis(&model, &scaled_sources(1), &financials).unwrap();

    c.bench_function("assemble_report", |b| {
        b.iter(|| assemble_report(black_box(kpis.clone()), black_box(financials)))
    });
}

criterion_group!(
    benches,
    bench_calculate_kpis,
    bench_from_records,
    bench_assemble_report
);
criterion_main!(benches);
