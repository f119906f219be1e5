//! Benchmarks for Swd operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};
use swd::{NamedSample, Sample, Swd};

fn gaussian_uni(center: f64, count: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let z: f64 = StandardNormal.sample(&mut rng);
            center + z
        })
        .collect()
}

fn gaussian_multi(center: (f64, f64), count: usize, seed: u64) -> Sample {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points = (0..count)
        .map(|_| {
            let dx: f64 = StandardNormal.sample(&mut rng);
            let dy: f64 = StandardNormal.sample(&mut rng);
            vec![center.0 + dx, center.1 + dy]
        })
        .collect();
    Sample::multi(points).unwrap()
}

fn benchmark_wasserstein_1d(c: &mut Criterion) {
    let x = gaussian_uni(0.0, 200, 1);
    let y = gaussian_uni(3.0, 200, 2);

    c.bench_function("wasserstein_1d_200x200", |b| {
        b.iter(|| swd::wasserstein_1d(black_box(&x), black_box(&y), 1001))
    });
}

fn benchmark_sliced(c: &mut Criterion) {
    let x = gaussian_multi((0.0, 0.0), 200, 1);
    let y = gaussian_multi((3.0, 3.0), 200, 2);
    let swd = Swd::with_seed(42);

    c.bench_function("sliced_2d_64_projections", |b| {
        b.iter(|| swd.distance(black_box(&x), black_box(&y)))
    });
}

fn benchmark_matrix(c: &mut Criterion) {
    let samples: Vec<NamedSample> = (0..4)
        .map(|i| {
            NamedSample::new(
                format!("sample_{i}.csv"),
                gaussian_multi((i as f64 * 2.0, 0.0), 200, i as u64),
            )
        })
        .collect();
    let swd = Swd::with_seed(42).projections(16);

    c.bench_function("matrix_4_samples", |b| b.iter(|| swd.matrix(black_box(&samples))));
}

criterion_group!(
    benches,
    benchmark_wasserstein_1d,
    benchmark_sliced,
    benchmark_matrix
);
criterion_main!(benches);
