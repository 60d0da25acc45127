//! Criterion benchmarks for polyinterp_core Newton kernels.
//!
//! Measures coefficient generation (O(n²)) and nested evaluation (O(n))
//! in both precisions across node counts to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polyinterp_core::math::newton::{divided_differences, nested_evaluate};

/// Chebyshev-like nodes on [-1, 1] with a smooth ordinate.
fn generate_nodes(n: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..n)
        .map(|i| (std::f64::consts::PI * (i as f64 + 0.5) / n as f64).cos())
        .collect();
    let ys: Vec<f64> = xs.iter().map(|&x| (3.0 * x).sin() + 0.5 * x * x).collect();
    (xs, ys)
}

/// Benchmark divided-difference coefficient generation.
fn bench_divided_differences(c: &mut Criterion) {
    let mut group = c.benchmark_group("divided_differences");

    for size in [8, 32, 128] {
        let (xs, ys) = generate_nodes(size);
        let xs32: Vec<f32> = xs.iter().map(|&v| v as f32).collect();
        let ys32: Vec<f32> = ys.iter().map(|&v| v as f32).collect();

        group.bench_with_input(BenchmarkId::new("f64", size), &(&xs, &ys), |b, (xs, ys)| {
            let mut out = vec![0.0_f64; xs.len()];
            b.iter(|| divided_differences(black_box(xs), black_box(ys), &mut out).unwrap());
        });

        group.bench_with_input(
            BenchmarkId::new("f32", size),
            &(&xs32, &ys32),
            |b, (xs, ys)| {
                let mut out = vec![0.0_f32; xs.len()];
                b.iter(|| divided_differences(black_box(xs), black_box(ys), &mut out).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark nested evaluation at 100 query points.
fn bench_nested_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_evaluate");

    for size in [8, 32, 128] {
        let (xs, ys) = generate_nodes(size);
        let mut coeffs = vec![0.0; size];
        divided_differences(&xs, &ys, &mut coeffs).unwrap();
        let queries: Vec<f64> = (0..100).map(|i| -1.0 + 2.0 * i as f64 / 99.0).collect();

        group.bench_with_input(
            BenchmarkId::new("lookup_100", size),
            &(&xs, &coeffs),
            |b, (xs, coeffs)| {
                b.iter(|| {
                    for &q in &queries {
                        let _ = nested_evaluate(black_box(q), xs, coeffs);
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_divided_differences, bench_nested_evaluate);
criterion_main!(benches);
