use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dendro::cluster::Ward;
use rand::prelude::*;

fn synthetic(n: usize, d: usize, seed: u64) -> Vec<Vec<f32>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..d).map(|_| rng.random::<f32>()).collect())
        .collect()
}

fn bench_ward(c: &mut Criterion) {
    let mut group = c.benchmark_group("ward");

    let data = synthetic(300, 16, 42);
    group.bench_function("fit_n300_d16", |b| {
        b.iter(|| {
            Ward::default().fit(black_box(&data)).unwrap();
        })
    });

    // The reference path is O(n^4 d); keep it small.
    let small = synthetic(40, 16, 42);
    group.bench_function("fit_n40_d16", |b| {
        b.iter(|| {
            Ward::default().fit(black_box(&small)).unwrap();
        })
    });
    group.bench_function("fit_reference_n40_d16", |b| {
        b.iter(|| {
            Ward::default().fit_reference(black_box(&small)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_ward);
criterion_main!(benches);
