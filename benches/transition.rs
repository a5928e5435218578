//! Benchmarks for the trend transition and band selection

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trend_tracker::clock::SECONDS_PER_DAY;
use trend_tracker::metadata::Band;
use trend_tracker::trend::{advance, PriceObservation, TrendState};

fn benchmark_advance_consecutive(c: &mut Criterion) {
    let state = TrendState {
        latest_price: 2000_00000000,
        latest_date_checked: 19_000 * SECONDS_PER_DAY,
        trend: 4,
    };
    let observation = PriceObservation {
        price: 2100_00000000,
        observed_at: 19_001 * SECONDS_PER_DAY + 9 * 3_600,
    };

    c.bench_function("advance_consecutive_day", |b| {
        b.iter(|| advance(black_box(&state), black_box(observation)))
    });
}

fn benchmark_advance_skip(c: &mut Criterion) {
    let state = TrendState {
        latest_price: 2000_00000000,
        latest_date_checked: 19_000 * SECONDS_PER_DAY,
        trend: -6,
    };
    let observation = PriceObservation {
        price: 1900_00000000,
        observed_at: 19_005 * SECONDS_PER_DAY,
    };

    c.bench_function("advance_skipped_days", |b| {
        b.iter(|| advance(black_box(&state), black_box(observation)))
    });
}

fn benchmark_band_select(c: &mut Criterion) {
    c.bench_function("band_select", |b| {
        b.iter(|| Band::select(black_box(-3), black_box(1800_00000000)))
    });
}

criterion_group!(
    benches,
    benchmark_advance_consecutive,
    benchmark_advance_skip,
    benchmark_band_select
);
criterion_main!(benches);
