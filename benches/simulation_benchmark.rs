/*
 * Simulation Benchmark
 *
 * Measures the per-tick cost of both simulation variants across population
 * sizes, and the sequential/parallel split of the flocking tick.
 */

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use boid_swarm::config::{FirefightParams, FlockParams};
use boid_swarm::{FirefightSimulation, FlockSimulation};

fn bench_flock_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("flock_tick");

    for num_boids in [100, 500, 1000, 2000] {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), &num_boids, |b, &n| {
            let params = FlockParams {
                num_boids: n,
                parallel: false,
                ..FlockParams::default()
            };
            let mut rng = StdRng::seed_from_u64(7);
            let mut sim = FlockSimulation::new(params, &mut rng);

            b.iter(|| sim.tick());
        });
    }

    group.finish();
}

fn bench_flock_tick_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("flock_tick_parallel");

    for num_boids in [500, 1000, 2000] {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), &num_boids, |b, &n| {
            let params = FlockParams {
                num_boids: n,
                parallel: true,
                ..FlockParams::default()
            };
            let mut rng = StdRng::seed_from_u64(7);
            let mut sim = FlockSimulation::new(params, &mut rng);

            b.iter(|| sim.tick());
        });
    }

    group.finish();
}

fn bench_firefight_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("firefight_tick");

    for num_boids in [20, 100, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), &num_boids, |b, &n| {
            let params = FirefightParams {
                num_boids: n,
                num_fires: 25,
                // Keep the fire set alive for the whole measurement
                fire_size_min: 1.0e7,
                fire_size_max: 2.0e7,
                ..FirefightParams::default()
            };
            let mut rng = StdRng::seed_from_u64(7);
            let mut sim = FirefightSimulation::new(params, &mut rng);

            b.iter(|| sim.tick());
        });
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
    targets = bench_flock_tick, bench_flock_tick_parallel, bench_firefight_tick
}

criterion_main!(benches);
