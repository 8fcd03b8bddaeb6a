//! Convolution benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of each method (short to long signals)
//! - Kernel length at a fixed signal length
//! - Integer inputs (exact accumulation)
//! - Output modes
//!
//! For sequential direct evaluation only, use `FASTCONVOLVE_BACKEND=serial cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastConvolve::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::f64::consts::PI;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTCONVOLVE_BACKEND").ok().as_deref() {
        Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a noisy two-tone signal.
fn generate_signal(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.1).unwrap();

    (0..size)
        .map(|i| {
            let t = i as f64 / 1000.0;
            (2.0 * PI * 5.0 * t).sin() + 0.3 * (2.0 * PI * 120.0 * t).sin()
                + noise_dist.sample(&mut rng)
        })
        .collect()
}

/// Generate a normalized Hann window of the given length.
fn generate_kernel(size: usize) -> Vec<f64> {
    let raw: Vec<f64> = (0..size)
        .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f64 / size.max(2) as f64).cos())
        .collect();
    let sum: f64 = raw.iter().sum::<f64>().max(f64::EPSILON);
    raw.iter().map(|v| v / sum).collect()
}

/// Generate uniformly distributed 12-bit integer samples.
///
/// Kept small enough that the FFT path stays inside the exact integer range.
fn generate_integers(size: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new_inclusive(-2_048, 2_047).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(30);

    let h = generate_kernel(128);

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        let x = generate_signal(size, 42);

        for method in [Direct, Fft, Auto] {
            let model = Convolve::new()
                .method(method)
                .parallel(use_parallel)
                .build()
                .unwrap();

            group.bench_with_input(BenchmarkId::new(method.name(), size), &size, |b, _| {
                b.iter(|| model.convolve(black_box(&x), black_box(&h)).unwrap())
            });
        }

        group.bench_with_input(BenchmarkId::new("core", size), &size, |b, _| {
            b.iter(|| convolve::convolve_full(black_box(&x), black_box(&h)).unwrap())
        });
    }
    group.finish();
}

fn bench_kernel_length(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("kernel_length_{}", mode_name));
    group.sample_size(30);

    let x = generate_signal(20_000, 7);

    for k in [4, 16, 64, 256, 1024] {
        let h = generate_kernel(k);

        for method in [Direct, Fft] {
            let model = Convolve::new()
                .method(method)
                .parallel(use_parallel)
                .build()
                .unwrap();

            group.bench_with_input(BenchmarkId::new(method.name(), k), &k, |b, _| {
                b.iter(|| model.convolve(black_box(&x), black_box(&h)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_integers(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("integers_{}", mode_name));
    group.sample_size(30);

    let x = generate_integers(20_000, 3);
    let h = generate_integers(256, 4);

    for method in [Direct, Fft, Auto] {
        let model = Convolve::new()
            .method(method)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.bench_function(method.name(), |b| {
            b.iter(|| model.convolve(black_box(&x), black_box(&h)).unwrap())
        });
    }
    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("modes_{}", mode_name));
    group.sample_size(50);

    let x = generate_signal(10_000, 11);
    let h = generate_kernel(500);

    for mode in [Full, Same, Valid] {
        let model = Convolve::new()
            .mode(mode)
            .parallel(use_parallel)
            .build()
            .unwrap();

        group.bench_function(mode.name(), |b| {
            b.iter(|| model.convolve(black_box(&x), black_box(&h)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_kernel_length,
    bench_integers,
    bench_modes,
);
criterion_main!(benches);
