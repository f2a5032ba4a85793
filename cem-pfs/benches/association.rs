//! Benchmark association and motion compensation.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use cem_pfs::{Feature, Point2D, RelativeMotion, associate, compensate_all};

fn create_features(n: usize, offset: f64) -> Vec<Feature> {
    (0..n)
        .map(|i| {
            // Deterministic scatter over a 40m x 20m lot
            let x = (i as f64 * 7.3).sin() * 20.0 + offset;
            let y = (i as f64 * 3.1).cos() * 10.0;
            Feature::marker(i as u32, 0, Point2D::new(x, y), Point2D::new(x, y + 2.5))
        })
        .collect()
}

fn bench_associate(c: &mut Criterion) {
    let mut group = c.benchmark_group("associate");

    for n in [8, 16, 64, 256].iter() {
        let previous = create_features(*n, 0.0);
        let current = create_features(*n, 0.1);

        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, _| {
            b.iter(|| black_box(associate(black_box(&previous), black_box(&current), 0.5)))
        });
    }

    group.finish();
}

fn bench_compensate(c: &mut Criterion) {
    let mut group = c.benchmark_group("compensate_all");
    let motion = RelativeMotion::new(-0.3, 0.02, 0.01);

    for n in [16, 256].iter() {
        let features = create_features(*n, 0.0);

        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, _| {
            b.iter(|| black_box(compensate_all(black_box(&features), motion)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_associate, bench_compensate);
criterion_main!(benches);
