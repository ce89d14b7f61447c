use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kmeans2d::{run_clustering, ClusteringConfig, Point};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

fn random_points(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
        .collect()
}

fn benchmark_varying_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_points");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let k = 8;
    let point_counts = [1_000, 10_000, 100_000];

    for n in point_counts.iter() {
        group.throughput(Throughput::Elements(*n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let points = random_points(n, 42);
            let config = ClusteringConfig::new(k).with_iterations(5).with_seed(42);

            b.iter(|| run_clustering(black_box(&points), &config).unwrap());
        });
    }
    group.finish();
}

fn benchmark_varying_clusters(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_clusters");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n = 10_000;
    let cluster_counts = [4, 16, 64];

    for k in cluster_counts.iter() {
        group.throughput(Throughput::Elements(*k as u64));
        group.bench_with_input(BenchmarkId::from_parameter(k), k, |b, &k| {
            let points = random_points(n, 42);
            let config = ClusteringConfig::new(k).with_iterations(5).with_seed(42);

            b.iter(|| run_clustering(black_box(&points), &config).unwrap());
        });
    }
    group.finish();
}

fn benchmark_varying_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_iterations");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n = 10_000;
    let k = 8;
    let iteration_counts = [1, 5, 25];

    for iterations in iteration_counts.iter() {
        group.throughput(Throughput::Elements(*iterations as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(iterations),
            iterations,
            |b, &iterations| {
                let points = random_points(n, 42);
                let config = ClusteringConfig::new(k)
                    .with_iterations(iterations)
                    .with_seed(42);

                b.iter(|| run_clustering(black_box(&points), &config).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_varying_points,
    benchmark_varying_clusters,
    benchmark_varying_iterations,
);

criterion_main!(benches);
