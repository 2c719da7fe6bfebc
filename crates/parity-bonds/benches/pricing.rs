//! Benchmarks for bond pricing and yield solving.
//!
//! Run with: cargo bench -p parity-bonds

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use parity_bonds::prelude::*;
use parity_core::Date;
use parity_curves::RateCurve;

// =============================================================================
// TEST DATA
// =============================================================================

fn create_test_bond(maturity_year: i32, frequency: u32) -> BondTerms {
    BondTerms::builder()
        .as_of(Date::from_ymd(2025, 4, 17).unwrap())
        .maturity(Date::from_ymd(maturity_year, 9, 25).unwrap())
        .coupon_rate(4.5)
        .frequency(frequency)
        .build()
        .unwrap()
}

fn create_test_curve() -> RateCurve {
    RateCurve::from_pairs(&[
        (0.25, 3.0),
        (0.5, 3.2),
        (1.0, 3.5),
        (2.0, 3.8),
        (5.0, 4.5),
        (10.0, 5.0),
        (30.0, 5.5),
    ])
    .unwrap()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_cashflows(c: &mut Criterion) {
    let mut group = c.benchmark_group("cashflows");
    for maturity_year in [2027, 2035, 2055] {
        let terms = create_test_bond(maturity_year, 2);
        group.bench_with_input(
            BenchmarkId::from_parameter(maturity_year),
            &terms,
            |b, terms| b.iter(|| vanilla_bond_cashflows(black_box(terms)).unwrap()),
        );
    }
    group.finish();
}

fn bench_pv(c: &mut Criterion) {
    let terms = create_test_bond(2048, 2);
    let curve = create_test_curve();

    c.bench_function("pv_from_yield", |b| {
        b.iter(|| pv_from_yield(black_box(4.0), black_box(&terms)).unwrap());
    });
    c.bench_function("pv_from_curve_with_principal", |b| {
        b.iter(|| pv_from_curve_with_principal(black_box(&terms), black_box(&curve)).unwrap());
    });
}

fn bench_ytm(c: &mut Criterion) {
    let mut group = c.benchmark_group("ytm_from_price");
    for frequency in [1, 2, 4, 12] {
        let terms = create_test_bond(2048, frequency);
        let price = pv_from_yield(5.25, &terms).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(frequency), &terms, |b, terms| {
            b.iter(|| ytm_from_price(black_box(price), black_box(terms)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cashflows, bench_pv, bench_ytm);
criterion_main!(benches);
