// ============================================================================
// Quotation and Paging Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Conversion - f64, string and decimal round trips
// 2. Price Adjustment - percentage moves snapped onto a price step
// 3. Pagination - page-number walk over an in-memory result set
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use invest_api::prelude::*;
use std::hint::black_box;

// ============================================================================
// Conversion Benchmarks
// ============================================================================

fn benchmark_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("quotation_conversion");

    group.bench_function("from_f64", |b| {
        b.iter(|| black_box(Quotation::from_f64(black_box(123.456_789))))
    });

    let quotation = Quotation::new(123, 456_789_000);
    group.bench_function("to_f64", |b| b.iter(|| black_box(black_box(quotation).to_f64())));

    group.bench_function("display", |b| b.iter(|| black_box(quotation.to_string())));

    group.bench_function("from_str", |b| {
        b.iter(|| black_box(black_box("-98.210000000").parse::<Quotation>()))
    });

    group.bench_function("to_decimal", |b| {
        b.iter(|| black_box(black_box(quotation).to_decimal()))
    });

    group.finish();
}

// ============================================================================
// Price Adjustment Benchmarks
// ============================================================================

fn benchmark_price_adjustment(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_adjustment");
    let last = Quotation::new(101, 250_000_000);

    for step_nano in [1_000_000, 10_000_000, 500_000_000].iter() {
        let step = Quotation::new(0, *step_nano);

        group.bench_with_input(BenchmarkId::new("decrease_down", step_nano), &step, |b, step| {
            b.iter(|| black_box(last.decrease_by_with_step(3.0, *step, RoundingMode::Down)))
        });

        group.bench_with_input(BenchmarkId::new("increase_up", step_nano), &step, |b, step| {
            b.iter(|| black_box(last.increase_by_with_step(5.0, *step, RoundingMode::Up)))
        });
    }

    group.finish();
}

// ============================================================================
// Pagination Benchmarks
// ============================================================================

fn benchmark_pager(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager_collect");
    let runtime = match tokio::runtime::Builder::new_current_thread().build() {
        Ok(runtime) => runtime,
        Err(_) => return,
    };

    for total in [1_000usize, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("page_number", total), total, |b, &total| {
            b.iter(|| {
                let pager = Pager::new();
                let walk = pager.collect(PageRequest::first_page(1_000), |request| {
                    let start = request.page_number().unwrap_or_default() as usize * 1_000;
                    let end = (start + 1_000).min(total);
                    let page = Page::with_total((start..end).collect::<Vec<_>>(), total);
                    async move { Ok::<_, ApiError>(page) }
                });
                black_box(runtime.block_on(walk))
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_conversions,
    benchmark_price_adjustment,
    benchmark_pager,
);

criterion_main!(benches);
