#![no_main]

//! Full turn fuzzer.
//!
//! Drives the agent through several turns against a board with arbitrary
//! balances, incomes and edge blocking, then checks the accounting
//! invariants: balances never go negative and mobile units never sit on a
//! blocked tile.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use parapet::strategy::candidate_locations;
use parapet::{Agent, Board, GameConfig, GameView, Pool, UnitRole};

/// Structured input for turn fuzzing.
#[derive(Arbitrary, Debug)]
struct TurnInput {
    /// Starting structure pool, scaled into a sane range.
    structure_balance: u16,
    /// Starting mobile pool, scaled into a sane range.
    mobile_balance: u16,
    /// Per-turn structure income.
    structure_income: u8,
    /// Per-turn mobile income.
    mobile_income: u8,
    /// Bitmask over home edge tiles to pre-occupy.
    blocked_mask: u32,
    /// Strategy RNG seed.
    seed: u64,
    /// Number of turns to simulate.
    num_turns: u8,
}

fuzz_target!(|input: TurnInput| {
    let config = GameConfig::builtin();
    let Ok(mut agent) = Agent::from_config(&config, input.seed) else {
        return;
    };

    let mut board = Board::with_balances(
        agent.units().clone(),
        f64::from(input.structure_balance) / 10.0,
        f64::from(input.mobile_balance) / 10.0,
    );
    board.set_income(
        f64::from(input.structure_income) / 10.0,
        f64::from(input.mobile_income) / 10.0,
    );

    let edges = candidate_locations(&board);
    let mut blocked = Vec::new();
    for (i, &at) in edges.iter().enumerate() {
        if input.blocked_mask & (1 << (i % 32)) != 0 && board.force_structure(at, UnitRole::Wall) {
            blocked.push(at);
        }
    }

    let turns = input.num_turns.min(50);
    for _ in 0..turns {
        agent.play_turn(&mut board);

        assert!(board.resource(Pool::Structure) >= -1e-9);
        assert!(board.resource(Pool::Mobile) >= -1e-9);
        for &at in &blocked {
            assert_eq!(board.mobile_at(at), 0);
        }
    }
});
