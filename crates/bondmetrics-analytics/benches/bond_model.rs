//! Benchmarks for the bond valuation model.
//!
//! Run with: cargo bench -p bondmetrics-analytics

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use bondmetrics_analytics::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_test_terms(id: usize) -> BondTerms {
    let coupons = [0.0, 0.02, 0.035, 0.05, 0.06, 0.09];
    let maturities = [2.0, 5.0, 7.5, 10.0, 20.0, 25.0, 30.0];

    BondTerms::new(
        coupons[id % coupons.len()],
        100.0,
        maturities[id % maturities.len()],
        2,
    )
    .unwrap()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_price(c: &mut Criterion) {
    let terms = create_test_terms(4);

    c.bench_function("price_from_yield_25y", |b| {
        b.iter(|| price_from_yield(black_box(&terms), black_box(0.09)))
    });
}

fn bench_solve_yield(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_yield");

    for method in [YieldMethod::Newton, YieldMethod::Secant] {
        let solver = YieldSolver::new().with_method(method);
        let terms = create_test_terms(4);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{method:?}")),
            &terms,
            |b, terms| b.iter(|| solver.solve(black_box(terms), black_box(70.357), 0.05)),
        );
    }

    group.finish();
}

fn bench_set_yield(c: &mut Criterion) {
    let mut bond = BondModel::from_yield(create_test_terms(4), 0.09).unwrap();
    let yields = [0.05, 0.07, 0.09, 0.11];
    let mut i = 0;

    c.bench_function("set_yield", |b| {
        b.iter(|| {
            i = (i + 1) % yields.len();
            bond.set_yield(black_box(yields[i]))
        })
    });
}

fn bench_yield_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("yield_sweep");
    group.sample_size(50);

    let bond = BondModel::from_yield(create_test_terms(6), 0.05).unwrap();
    for size in [10usize, 100, 1000] {
        let yields: Vec<f64> = (0..size).map(|i| 0.001 + 0.0002 * i as f64).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &yields, |b, yields| {
            b.iter(|| yield_sweep(black_box(&bond), black_box(yields)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_price,
    bench_solve_yield,
    bench_set_yield,
    bench_yield_sweep
);
criterion_main!(benches);
