/*
 * Gopher Flock Benchmark
 *
 * Measures the cost of a flock tick at several flock sizes, with gophers
 * updated sequentially and on the rayon pool.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gophers::{Flock, FlockConfig};
use std::time::Duration;

fn flock_with(agent_count: usize, parallel: bool) -> Flock {
    let config = FlockConfig {
        agent_count,
        parallel,
        ..FlockConfig::default().with_seed(42)
    };
    Flock::with_config(config).expect("benchmark config is valid")
}

// Benchmark one tick of the whole flock
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("flock_tick");

    for agent_count in [10, 100, 1_000, 10_000].iter() {
        for (label, parallel) in [("sequential", false), ("parallel", true)] {
            group.bench_with_input(
                BenchmarkId::new(label, agent_count),
                agent_count,
                |b, &n| {
                    let mut flock = flock_with(n, parallel);
                    b.iter(|| {
                        flock.tick();
                        black_box(flock.ticks());
                    });
                },
            );
        }
    }

    group.finish();
}

// Benchmark the center-of-gravity reduction on its own
fn bench_center_of_gravity(c: &mut Criterion) {
    let mut group = c.benchmark_group("center_of_gravity");

    for agent_count in [100, 10_000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(agent_count),
            agent_count,
            |b, &n| {
                let flock = flock_with(n, false);
                b.iter(|| black_box(flock.center_of_gravity()));
            },
        );
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_tick, bench_center_of_gravity
}

criterion_main!(benches);
