use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use planetsim::kepler::solve_kepler_equation;

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    rng.random::<f64>() * std::f64::consts::TAU
}

/// Pre-generate `(M, e)` pairs with `e` drawn from `ecc_range`.
fn make_cases(
    rng: &mut StdRng,
    samples: usize,
    ecc_range: std::ops::Range<f64>,
) -> Vec<(f64, f64)> {
    (0..samples)
        .map(|_| {
            let e = rng.random_range(ecc_range.clone());
            (rand_angle(rng), e)
        })
        .collect()
}

/// Planetary regime: e ∈ [0.0, 0.3)
fn bench_planetary(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

    c.bench_function("solve_kepler_equation/planetary_e<0.3", |b| {
        b.iter_batched(
            || make_cases(&mut rng, 10_000, 0.0..0.3),
            |cases| {
                for (m, e) in cases {
                    let ecc_anomaly = solve_kepler_equation(black_box(m), black_box(e)).unwrap();
                    black_box(ecc_anomaly);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Cometary regime, still elliptic: e ∈ [0.7, 0.99)
fn bench_high_e(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);

    c.bench_function("solve_kepler_equation/high_e_0.7..0.99", |b| {
        b.iter_batched(
            || make_cases(&mut rng, 10_000, 0.7..0.99),
            |cases| {
                for (m, e) in cases {
                    let _ = black_box(solve_kepler_equation(black_box(m), black_box(e)));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Near-circular regime: e ≈ 1e-12
fn bench_near_circular(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);

    c.bench_function("solve_kepler_equation/near_circular_e=1e-12", |b| {
        b.iter_batched(
            || make_cases(&mut rng, 10_000, 1e-12..2e-12),
            |cases| {
                for (m, e) in cases {
                    let ecc_anomaly = solve_kepler_equation(black_box(m), black_box(e)).unwrap();
                    black_box(ecc_anomaly);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Many revolutions away from the epoch, as for a propagation decades ahead.
fn bench_large_mean_anomaly(c: &mut Criterion) {
    let m = 40.0 * std::f64::consts::TAU + 1.234;
    let e = 0.0934;

    c.bench_function("solve_kepler_equation/large_mean_anomaly", |b| {
        b.iter(|| black_box(solve_kepler_equation(black_box(m), black_box(e)).ok()))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_planetary, bench_high_e, bench_near_circular, bench_large_mean_anomaly
);
criterion_main!(benches);
