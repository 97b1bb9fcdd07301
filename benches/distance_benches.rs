use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use env_logger::Env;
use knndist::{prepare, NormalizedEuclidean, PairwiseDistance};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MISSING_RATE: f64 = 0.2;
const N_FEATURES: usize = 32;

fn random_dataset(n_samples: usize) -> (Array2<f64>, Array2<bool>) {
    let mut rng = StdRng::seed_from_u64(42);

    let data = Array2::from_shape_fn((n_samples, N_FEATURES), |_| rng.gen_range(-1.0..1.0));
    let mask = Array2::from_shape_fn((n_samples, N_FEATURES), |_| {
        rng.gen_bool(MISSING_RATE)
    });

    (data, mask)
}

fn bench_all_pairs(c: &mut Criterion) {
    env_logger::Builder::from_env(Env::default()).try_init().ok();

    let mut group = c.benchmark_group("all_pairs_normalized");
    for n_samples in [100, 500, 1000] {
        let (mut data, mask) = random_dataset(n_samples);
        ndarray::Zip::from(&mut data).and(&mask).for_each(|v, &m| {
            if m {
                *v = f64::NAN;
            }
        });

        group.bench_with_input(BenchmarkId::from_parameter(n_samples), &data, |b, data| {
            b.iter(|| NormalizedEuclidean.all_pairs(data.view()))
        });
    }
    group.finish();
}

fn bench_prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare");
    for n_samples in [100, 500] {
        let (data, mask) = random_dataset(n_samples);

        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            &(data, mask),
            |b, (data, mask)| b.iter(|| prepare(data.view(), mask.view()).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_all_pairs, bench_prepare);
criterion_main!(benches);
