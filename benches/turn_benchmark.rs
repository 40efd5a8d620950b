//! Benchmarks for the per-turn decision procedure and full skirmishes.
//!
//! The single-turn case is the latency budget that matters against a live
//! engine; the skirmish cases measure the batch-evaluation hot path.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use parapet::{Agent, Board, GameConfig, SkirmishConfig, run_skirmish};

fn bench_single_turn(c: &mut Criterion) {
    let config = GameConfig::builtin();

    c.bench_function("single_turn_empty_board", |b| {
        b.iter(|| {
            let mut agent = Agent::from_config(&config, black_box(42)).unwrap();
            let mut board = Board::with_balances(agent.units().clone(), 25.0, 15.0);
            black_box(agent.play_turn(&mut board))
        });
    });
}

fn bench_skirmish(c: &mut Criterion) {
    let game_config = GameConfig::builtin();
    let config = SkirmishConfig::default();

    c.bench_function("skirmish_100_turns", |b| {
        b.iter(|| {
            let result = run_skirmish(black_box(42), &game_config, &config);
            black_box(result)
        });
    });
}

fn bench_skirmish_batch(c: &mut Criterion) {
    let game_config = GameConfig::builtin();
    let config = SkirmishConfig::default();

    c.bench_function("10_skirmishes_sequential", |b| {
        b.iter(|| {
            for seed in 0..10u64 {
                let result = run_skirmish(black_box(seed), &game_config, &config);
                black_box(result).unwrap();
            }
        });
    });
}

criterion_group!(benches, bench_single_turn, bench_skirmish, bench_skirmish_batch);
criterion_main!(benches);
