//! Criterion benchmarks for the TSP genetic algorithm.
//!
//! Cities are placed on a deterministic pseudo-random grid so runs are
//! comparable across machines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_ga::ga::operators::{crossover_pair, order_crossover};
use tsp_ga::ga::{generate, GaConfig, GaRunner, Point, Population};
use tsp_ga::random::create_rng;

fn cities(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            Point::new((t * 7919.0) % 1000.0, (t * 104_729.0) % 700.0)
        })
        .collect()
}

// ===========================================================================
// Operators
// ===========================================================================

fn bench_order_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_crossover");

    for &n in &[40usize, 200, 1000] {
        let reference = cities(n);
        let mut rng = create_rng(42);
        let parents = generate(2, &reference, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &parents, |b, p| {
            b.iter(|| {
                let child = order_crossover(black_box(&p[0]), black_box(&p[1]), n / 4, 3 * n / 4);
                black_box(child)
            })
        });
    }
    group.finish();
}

fn bench_crossover_and_mutate(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossover_and_mutate");

    for &n in &[40usize, 200] {
        let reference = cities(n);
        let mut rng = create_rng(42);
        let parents = generate(2, &reference, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &parents, |b, p| {
            b.iter(|| {
                let (first, second) = crossover_pair(&p[0], &p[1], &mut rng).unwrap();
                black_box((first.mutate(0.01, &mut rng), second.mutate(0.01, &mut rng)))
            })
        });
    }
    group.finish();
}

// ===========================================================================
// Generations
// ===========================================================================

fn bench_advance_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_generation");
    group.sample_size(20);

    for (n, pop) in [(40usize, 50usize), (40, 200), (200, 100)] {
        let config = GaConfig::default().with_population_size(pop).with_seed(42);
        let mut population = Population::new(&cities(n), &config).unwrap();
        group.bench_function(BenchmarkId::new(format!("n{n}_p{pop}"), pop), |b| {
            b.iter(|| {
                population.advance_generation().unwrap();
                black_box(population.fittest_fitness())
            })
        });
    }
    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_run");
    group.sample_size(10);

    for (n, pop, gen) in [(40usize, 50usize, 100usize), (100, 100, 50)] {
        let points = cities(n);
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_max_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gen), n),
            &(points, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_order_crossover,
    bench_crossover_and_mutate,
    bench_advance_generation,
    bench_full_run
);
criterion_main!(benches);
