//! Regulus benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Tree construction from flat records (1K to 50K partitions)
//! - Cold-cache statistics and regression curves over whole trees
//! - Persistence histogram and level cuts
//! - Resampling (sequential and seeded parallel)
//!
//! For serial execution, use `REGULUS_BACKEND=serial cargo bench`.
//! For parallel execution (default), use `REGULUS_BACKEND=parallel cargo bench`.

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastRegulus::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::hint::black_box;
use std::sync::Arc;

// ============================================================================
// Helper Functions
// ============================================================================

fn use_parallel() -> (bool, &'static str) {
    match env::var("REGULUS_BACKEND").ok().as_deref() {
        Some("serial") => (false, "serial"),
        _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Two dimensions on the unit square and a smooth measure with Gaussian noise.
fn generate_dataset(size: usize, seed: u64) -> Arc<Dataset> {
    let mut rng = StdRng::seed_from_u64(seed);
    let coord = Uniform::new(0.0, 1.0).unwrap();
    let noise = Normal::new(0.0, 0.05).unwrap();

    let rows = (0..size)
        .map(|_| {
            let x: f64 = coord.sample(&mut rng);
            let y: f64 = coord.sample(&mut rng);
            let f = (6.0 * x).sin() + (4.0 * y).cos() + noise.sample(&mut rng);
            vec![x, y, f]
        })
        .collect();

    Arc::new(Dataset::new(vec!["x".into(), "y".into(), "f".into()], rows, 2).unwrap())
}

/// Balanced binary hierarchy over points ordered by `x`, `depth` levels deep.
fn generate_msc(dataset: &Dataset, depth: u32) -> MscRecord {
    let samples = dataset.samples();
    let mut pts_idx: Vec<usize> = (0..samples.len()).collect();
    pts_idx.sort_by(|&a, &b| samples[a].values[0].total_cmp(&samples[b].values[0]));

    let extrema = |span: [usize; 2]| {
        let ids = &pts_idx[span[0]..span[1]];
        let f = |id: &&usize| samples[**id].values[2];
        let min = ids.iter().min_by(|a, b| f(a).total_cmp(&f(b))).copied().unwrap();
        let max = ids.iter().max_by(|a, b| f(a).total_cmp(&f(b))).copied().unwrap();
        [min, max]
    };

    let mut partitions = Vec::new();
    let mut stack = vec![(0usize, [0usize, samples.len()], 0u32)];
    let mut next_id = 1;
    while let Some((id, span, d)) = stack.pop() {
        let lvl = 1.0 - d as f64 / depth as f64;
        let mut children = Vec::new();
        if d < depth && span[1] - span[0] >= 4 {
            let mid = (span[0] + span[1]) / 2;
            for child_span in [[span[0], mid], [mid, span[1]]] {
                children.push(next_id);
                stack.push((next_id, child_span, d + 1));
                next_id += 1;
            }
        }
        partitions.push(PartitionRecord::new(id, lvl, extrema(span), span, children));
    }

    MscRecord {
        name: "f".into(),
        pts_idx,
        partitions,
    }
}

fn load(dataset: &Arc<Dataset>, msc: &MscRecord) -> Tree {
    Regulus::new()
        .build()
        .unwrap()
        .load(Arc::clone(dataset), msc)
        .unwrap()
        .unwrap()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_build");
    group.sample_size(50);

    for depth in [10u32, 12, 14] {
        let dataset = generate_dataset(1 << (depth + 2), 42);
        let msc = generate_msc(&dataset, depth);
        group.throughput(Throughput::Elements(msc.partitions.len() as u64));

        group.bench_with_input(BenchmarkId::new("load", depth), &depth, |b, _| {
            b.iter(|| load(black_box(&dataset), black_box(&msc)))
        });
    }
    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let (parallel, mode) = use_parallel();
    let mut group = c.benchmark_group(format!("statistics_{mode}"));
    group.sample_size(30);

    for size in [1_000usize, 10_000, 50_000] {
        let dataset = generate_dataset(size, 7);
        let msc = generate_msc(&dataset, 6);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("all_partitions", size), &size, |b, _| {
            b.iter_batched(
                || load(&dataset, &msc),
                |tree| {
                    if parallel {
                        tree.par_prefetch_with(PrefetchPlan {
                            statistics: true,
                            regression: false,
                            linear: false,
                        });
                    } else {
                        for p in tree.iter() {
                            black_box(p.statistics());
                        }
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_regression(c: &mut Criterion) {
    let (parallel, mode) = use_parallel();
    let mut group = c.benchmark_group(format!("regression_{mode}"));
    group.sample_size(20);

    for size in [1_000usize, 5_000, 20_000] {
        let dataset = generate_dataset(size, 11);
        let msc = generate_msc(&dataset, 5);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("curves", size), &size, |b, _| {
            b.iter_batched(
                || load(&dataset, &msc),
                |tree| {
                    if parallel {
                        black_box(tree.par_regression_curves().len());
                    } else {
                        for p in tree.iter() {
                            let _ = black_box(p.regression_curve());
                        }
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");
    group.sample_size(50);

    for depth in [8u32, 12, 14] {
        let dataset = generate_dataset(1 << (depth + 2), 3);
        let msc = generate_msc(&dataset, depth);
        let tree = load(&dataset, &msc);

        group.bench_with_input(BenchmarkId::new("peel", depth), &depth, |b, _| {
            b.iter(|| black_box(tree.persistence_histogram()))
        });
        group.bench_with_input(BenchmarkId::new("level_cut", depth), &depth, |b, _| {
            b.iter(|| black_box(tree.level_cut(0.5).len()))
        });
    }
    group.finish();
}

fn bench_resample(c: &mut Criterion) {
    let (parallel, mode) = use_parallel();
    let mut group = c.benchmark_group(format!("resample_{mode}"));
    group.sample_size(50);

    let dataset = generate_dataset(10_000, 5);
    let msc = generate_msc(&dataset, 6);
    let tree = load(&dataset, &msc);
    let spec = ResampleSpec::<f64>::from_partitions(&tree.level_cut(0.5)).unwrap();

    for n in [10_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("draws", n), &n, |b, &n| {
            b.iter(|| {
                if parallel {
                    resample_parallel(black_box(&spec), n, 42).unwrap()
                } else {
                    let mut rng = StdRng::seed_from_u64(42);
                    resample_with(black_box(&spec), n, &mut rng).unwrap()
                }
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_tree_build,
    bench_statistics,
    bench_regression,
    bench_histogram,
    bench_resample,
);

criterion_main!(benches);
