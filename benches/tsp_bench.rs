//! Criterion benchmarks for tour evaluation, PMX, and single generations.
//!
//! Cities lie on a jittered grid so every run sees the same instance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsp_evo::ga::operators::pmx;
use tsp_evo::ga::{crossover_step, init_population, mutation_step, ParentSelection};
use tsp_evo::geometry::{CityTable, Point};
use tsp_evo::random::create_rng;
use tsp_evo::Tour;

fn grid(n: usize) -> CityTable {
    let side = (n as f64).sqrt().ceil() as usize;
    CityTable::from_points((0..n).map(|i| {
        let jitter = (i * 7919 % 13) as f64 * 0.1;
        Point::new((i % side) as f64 * 10.0 + jitter, (i / side) as f64 * 10.0)
    }))
    .unwrap()
}

fn bench_tour_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_length");
    for n in [100, 1000] {
        let cities = grid(n);
        let tour = Tour::random(n, &mut create_rng(42)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &tour, |b, tour| {
            b.iter(|| cities.tour_length(black_box(tour)).unwrap())
        });
    }
    group.finish();
}

fn bench_pmx(c: &mut Criterion) {
    let mut group = c.benchmark_group("pmx");
    for n in [100, 1000] {
        let mut rng = create_rng(42);
        let s = Tour::random(n, &mut rng).unwrap();
        let t = Tour::random(n, &mut rng).unwrap();
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| pmx(black_box(&s), black_box(&t), &mut rng).unwrap())
        });
    }
    group.finish();
}

fn bench_generation(c: &mut Criterion) {
    let cities = grid(200);
    let mut rng = create_rng(42);
    let current = init_population(&cities, 100, &mut rng).unwrap();

    c.bench_function("mutation_step/200x100", |b| {
        b.iter(|| mutation_step(black_box(&current), &cities, &mut rng).unwrap())
    });
    c.bench_function("crossover_step/200x100", |b| {
        b.iter(|| {
            crossover_step(
                black_box(&current),
                &cities,
                ParentSelection::Uniform,
                &mut rng,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_tour_length, bench_pmx, bench_generation);
criterion_main!(benches);
