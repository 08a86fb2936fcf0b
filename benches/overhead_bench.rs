//! Benchmark for the overhead of iterr's lazy wrapper.
//!
//! Runs the same pipeline over 1,000,000 seeded random numbers in `0..100`:
//!
//! 1. drop everything not greater than 60
//! 2. double what is left
//! 3. drop multiples of 3
//! 4. emit every survivor twice
//!
//! and compares a hand-written loop, std iterator combinators, and `Iter`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use iterr::iter::Iter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const INPUT_SIZE: usize = 1_000_000;
const SEED: u64 = 2024;

fn generate_numbers(size: usize) -> Vec<u32> {
    let mut generator = StdRng::seed_from_u64(SEED);
    (0..size).map(|_| generator.random_range(0..100)).collect()
}

// =============================================================================
// Pipeline Implementations
// =============================================================================

fn hand_written(numbers: &[u32]) -> Vec<u32> {
    let mut result = Vec::new();
    for &number in numbers {
        if number <= 60 {
            continue;
        }
        let doubled = number * 2;
        if doubled % 3 == 0 {
            continue;
        }
        result.push(doubled);
        result.push(doubled);
    }
    result
}

fn std_combinators(numbers: &[u32]) -> Vec<u32> {
    numbers
        .iter()
        .copied()
        .filter(|x| *x > 60)
        .map(|x| x * 2)
        .filter(|x| x % 3 != 0)
        .flat_map(|x| [x, x])
        .collect()
}

fn lazy_wrapper(numbers: &[u32]) -> Vec<u32> {
    Iter::new(numbers.iter().copied())
        .filter(|x| *x > 60)
        .map(|x| x * 2)
        .filter(|x| x % 3 != 0)
        .bind(|x| [x, x])
        .to_list()
}

// =============================================================================
// Overhead Benchmarks
// =============================================================================

fn benchmark_pipeline(criterion: &mut Criterion) {
    let numbers = generate_numbers(INPUT_SIZE);

    let expected = hand_written(&numbers);
    assert_eq!(std_combinators(&numbers), expected);
    assert_eq!(lazy_wrapper(&numbers), expected);

    let mut group = criterion.benchmark_group("pipeline_overhead");

    group.bench_function("hand_written", |bencher| {
        bencher.iter(|| black_box(hand_written(black_box(&numbers))));
    });

    group.bench_function("std_combinators", |bencher| {
        bencher.iter(|| black_box(std_combinators(black_box(&numbers))));
    });

    group.bench_function("iterr", |bencher| {
        bencher.iter(|| black_box(lazy_wrapper(black_box(&numbers))));
    });

    group.finish();
}

fn benchmark_fold(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fold_sum");

    for size in [1_000, 100_000, INPUT_SIZE] {
        let numbers = generate_numbers(size);

        group.bench_with_input(BenchmarkId::new("std", size), &numbers, |bencher, numbers| {
            bencher.iter(|| {
                let sum = numbers
                    .iter()
                    .map(|x| u64::from(*x))
                    .fold(0u64, |sum, x| sum + x);
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("iterr", size), &numbers, |bencher, numbers| {
            bencher.iter(|| {
                let sum = Iter::new(numbers.iter())
                    .map(|x| u64::from(*x))
                    .fold(0u64, |sum, x| sum + x);
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_pipeline, benchmark_fold);

criterion_main!(benches);
