//! Benchmarks for the indicator implementations.
//!
//! Run with: `cargo bench -p techind-indicators`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use techind_indicators::{bollinger, ema, rsi, sma};

fn generate_prices(n: usize) -> Vec<f64> {
    // Simple LCG so runs are reproducible without pulling in an RNG
    let mut prices = Vec::with_capacity(n);
    let mut price = 100.0;
    let mut seed = 42u64;

    for _ in 0..n {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        let upper_bits = u32::try_from(seed >> 33).unwrap_or(0);
        let random = f64::from(upper_bits) / f64::from(u32::MAX);

        // Price change: -1% to +1%
        let change = (random - 0.5) * 0.02;
        price *= 1.0 + change;
        prices.push(price);
    }

    prices
}

fn bench_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("Indicators");

    for size in [1_000_usize, 10_000, 100_000] {
        let prices = generate_prices(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("SMA", size), &prices, |b, prices| {
            b.iter(|| sma(black_box(prices), black_box(20)));
        });
        group.bench_with_input(BenchmarkId::new("EMA", size), &prices, |b, prices| {
            b.iter(|| ema(black_box(prices), black_box(20)));
        });
        group.bench_with_input(BenchmarkId::new("RSI", size), &prices, |b, prices| {
            b.iter(|| rsi(black_box(prices), black_box(14)));
        });
        group.bench_with_input(BenchmarkId::new("Bollinger", size), &prices, |b, prices| {
            b.iter(|| bollinger(black_box(prices), black_box(20), black_box(2.0)));
        });
    }

    group.finish();
}

fn bench_window_period(c: &mut Criterion) {
    // SMA and Bollinger rescan each window, so cost grows with the period
    let mut group = c.benchmark_group("Window_Period");
    let prices = generate_prices(100_000);

    for period in [5_usize, 20, 50, 200] {
        group.bench_with_input(BenchmarkId::new("SMA", period), &period, |b, &period| {
            b.iter(|| sma(black_box(&prices), black_box(period)));
        });
        group.bench_with_input(
            BenchmarkId::new("Bollinger", period),
            &period,
            |b, &period| {
                b.iter(|| bollinger(black_box(&prices), black_box(period), black_box(2.0)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_indicators, bench_window_period);
criterion_main!(benches);
