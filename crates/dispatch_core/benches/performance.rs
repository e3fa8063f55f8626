//! Performance benchmarks for dispatch_core using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dispatch_core::runner::run_simulation;
use dispatch_core::test_helpers::{diagonal_locations, in_memory_reader};
use dispatch_core::{DistanceHeap, ScenarioParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_distances(count: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0.0..10.0)).collect()
}

fn bench_heap_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_operations");
    for size in [1_000usize, 10_000, 100_000] {
        let distances = random_distances(size, 42);

        group.bench_with_input(BenchmarkId::new("insert", size), &distances, |b, d| {
            b.iter(|| {
                let mut heap = DistanceHeap::new(d.len());
                for value in d {
                    heap.insert(*value);
                }
                black_box(heap.size())
            });
        });

        group.bench_with_input(BenchmarkId::new("drain", size), &distances, |b, d| {
            b.iter(|| {
                let mut heap = DistanceHeap::new(d.len());
                for value in d {
                    heap.insert(*value);
                }
                while let Ok(value) = heap.extract_min() {
                    black_box(value);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("decrease_key", size), &distances, |b, d| {
            let mut heap = DistanceHeap::new(d.len());
            for value in d {
                heap.insert(*value);
            }
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| {
                let index = rng.gen_range(0..heap.size());
                heap.decrease_key(index, 0.01).expect("index drawn from size");
            });
        });
    }
    group.finish();
}

fn bench_simulation_run(c: &mut Criterion) {
    let scenarios = vec![("small", 10_000, 0.2), ("medium", 100_000, 0.5)];

    let mut group = c.benchmark_group("simulation_run");
    for (name, operations, p) in scenarios {
        let params = ScenarioParams::new(operations, p).with_seed(42);
        let taxis = diagonal_locations(operations);
        group.bench_with_input(BenchmarkId::from_parameter(name), &params, |b, params| {
            b.iter(|| {
                let report = run_simulation(params.clone(), in_memory_reader(&taxis))
                    .expect("benchmark run should succeed");
                black_box(report.counters.steps())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_heap_operations, bench_simulation_run);
criterion_main!(benches);
