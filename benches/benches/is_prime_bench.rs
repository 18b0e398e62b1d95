//! Criterion benchmark for the is_prime predicate
//!
//! This compares the divisor schedules on individual inputs and over a range.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use primality::Strategy;
use primality_benchmark_runner::BenchmarkRunner;

fn bench_is_prime_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_prime");

    // Small and large primes, plus a composite with a large smallest factor
    for input in [7i64, 29, 997, 9973, 1_000_000_007, 999_983 * 999_983] {
        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), input), &input, |b, &input| {
                b.iter(|| strategy.is_prime(black_box(input)))
            });
        }
    }

    group.finish();
}

fn bench_is_prime_range(c: &mut Criterion) {
    let runner = BenchmarkRunner::new();
    let mut group = c.benchmark_group("is_prime_range");

    for strategy in Strategy::ALL {
        group.bench_function(strategy.name(), |b| {
            b.iter(|| {
                runner
                    .run_range(strategy, black_box(0..=9_999))
                    .expect("Benchmark failed")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_is_prime_inputs, bench_is_prime_range);
criterion_main!(benches);
