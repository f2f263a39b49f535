//! End-to-end benchmarks: signal scan and full backtest over a random walk.

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use siglab::backtest::Backtester;
use siglab::domain::Bar;
use siglab::strategies::{
    BollingerReversion, CombineMethod, Combined, MaCrossover, MacdStrategy, RsiStrategy, Strategy,
};

fn random_walk_bars(n: usize, seed: u64) -> Vec<Bar> {
    let mut rng = StdRng::seed_from_u64(seed);
    let base = Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap();
    let mut close = 100.0_f64;
    (0..n)
        .map(|i| {
            let open = close;
            close = (close * (1.0 + rng.gen_range(-0.02..0.02))).max(1.0);
            Bar {
                timestamp: base + Duration::hours(i as i64),
                open,
                high: open.max(close) * 1.005,
                low: open.min(close) * 0.995,
                close,
                volume: rng.gen_range(100.0..10_000.0),
            }
        })
        .collect()
}

fn bench_signal_scan(c: &mut Criterion) {
    let bars = random_walk_bars(10_000, 7);
    let strategy = MaCrossover::new(20, 50).unwrap();
    c.bench_function("ma_crossover_scan_10k", |b| {
        b.iter(|| strategy.generate_signals(black_box(&bars)))
    });

    let bollinger = BollingerReversion::new(20, 2.0, true, 14, 2.0).unwrap();
    c.bench_function("bollinger_scan_10k", |b| {
        b.iter(|| bollinger.generate_signals(black_box(&bars)))
    });
}

fn bench_full_backtest(c: &mut Criterion) {
    let bars = random_walk_bars(10_000, 11);
    let combined = Combined::new(
        vec![
            Box::new(MaCrossover::new(20, 50).unwrap()) as Box<dyn Strategy>,
            Box::new(RsiStrategy::new(14, 70.0, 30.0).unwrap()),
            Box::new(MacdStrategy::new(12, 26, 9, 0.0).unwrap()),
        ],
        CombineMethod::Or,
    )
    .unwrap();
    let backtester = Backtester::new(Box::new(combined), 10_000.0).unwrap();
    c.bench_function("combined_or_backtest_10k", |b| {
        b.iter(|| backtester.run(black_box(&bars)))
    });
}

criterion_group!(benches, bench_signal_scan, bench_full_backtest);
criterion_main!(benches);
