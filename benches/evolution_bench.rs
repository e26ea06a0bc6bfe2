//! Criterion benchmarks for bridge-hand evolution.
//!
//! Measures the scoring function, the genetic operators and whole
//! generations, all with fixed seeds.

use card_evolution::evolution::{Evolution, EvolutionConfig};
use card_evolution::fitness::{BridgeFitness, HandFitness};
use card_evolution::genotype::{DealCounters, Hand};
use card_evolution::random::create_rng;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_bridge_score(c: &mut Criterion) {
    let mut rng = create_rng(42);
    let mut counters = DealCounters::new();
    let hands: Vec<Hand> = (0..256)
        .map(|_| Hand::genesis(&BridgeFitness, &mut rng, &mut counters))
        .collect();

    c.bench_function("bridge_score_256", |b| {
        b.iter(|| {
            let total: f64 = hands
                .iter()
                .map(|h| BridgeFitness.evaluate(black_box(h.expressed())))
                .sum();
            black_box(total)
        })
    });
}

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");
    let mut rng = create_rng(42);
    let mut counters = DealCounters::new();
    let mom = Hand::genesis(&BridgeFitness, &mut rng, &mut counters);
    let dad = Hand::genesis(&BridgeFitness, &mut rng, &mut counters);

    group.bench_function("bud", |b| {
        b.iter(|| {
            let child = Hand::bud(
                black_box(&mom),
                1.0 / 13.0,
                &BridgeFitness,
                &mut rng,
                &mut counters,
            );
            black_box(child)
        })
    });
    group.bench_function("mate", |b| {
        b.iter(|| {
            let child = Hand::mate(
                black_box(&mom),
                black_box(&dad),
                1.0 / 13.0,
                &BridgeFitness,
                &mut rng,
                &mut counters,
            );
            black_box(child)
        })
    });
    group.finish();
}

fn bench_generations(c: &mut Criterion) {
    let mut group = c.benchmark_group("generations");
    group.sample_size(10);

    for (pop, sexual) in [(50usize, false), (50, true), (200, false)] {
        let config = EvolutionConfig::default()
            .with_population_size(pop)
            .with_sexual(sexual)
            .with_fitness_goal(f64::from(u8::MAX))
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{pop}_sexual_{sexual}"), pop),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut evolution = Evolution::new(config.clone()).expect("valid config");
                    let outcome = evolution.run(black_box(20), None).expect("run succeeds");
                    black_box(outcome)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_bridge_score, bench_operators, bench_generations);
criterion_main!(benches);
