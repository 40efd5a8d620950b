//! Seeded local skirmishes: the agent against a fresh in-memory board.
//!
//! Provides a pure function interface: `(seed, config) -> SkirmishResult`.
//! Useful for demos, benchmarks and mass statistics runs; the same seed and
//! configuration always produce the same result.

use std::time::Duration;

use crate::agent::Agent;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::game::{Board, GameView, Pool};

/// Configuration for a local skirmish.
#[derive(Debug, Clone, Copy)]
pub struct SkirmishConfig {
    /// Number of turns to play.
    pub turns: u32,
    /// Starting structure-pool balance.
    pub structure_balance: f64,
    /// Starting mobile-pool balance.
    pub mobile_balance: f64,
    /// Structure-pool income per submitted turn.
    pub structure_income: f64,
    /// Mobile-pool income per submitted turn.
    pub mobile_income: f64,
}

impl Default for SkirmishConfig {
    fn default() -> Self {
        Self {
            turns: 100,
            structure_balance: 25.0,
            mobile_balance: 5.0,
            structure_income: 5.0,
            mobile_income: 5.0,
        }
    }
}

/// Aggregated result of one skirmish.
#[derive(Debug, Clone, Copy)]
pub struct SkirmishResult {
    /// The seed used for this skirmish.
    pub seed: u64,
    /// Turns actually played.
    pub turns_played: u32,
    /// Perimeter structures placed across all turns.
    pub structures_placed: u32,
    /// Secondary structures placed across all turns.
    pub supports_placed: u32,
    /// Mobile units deployed across all turns.
    pub units_deployed: u32,
    /// Structure-pool balance after the final turn.
    pub final_structure_balance: f64,
    /// Mobile-pool balance after the final turn.
    pub final_mobile_balance: f64,
    /// Total wall-clock decision time across all turns.
    pub decision_time: Duration,
}

/// Run one seeded skirmish to completion.
///
/// # Errors
///
/// Returns an error if the game configuration cannot be resolved.
pub fn run_skirmish(
    seed: u64,
    game_config: &GameConfig,
    config: &SkirmishConfig,
) -> Result<SkirmishResult, ConfigError> {
    let mut agent = Agent::from_config(game_config, seed)?;
    let mut board = Board::with_balances(
        agent.units().clone(),
        config.structure_balance,
        config.mobile_balance,
    );
    board.set_income(config.structure_income, config.mobile_income);

    let mut structures_placed = 0;
    let mut supports_placed = 0;
    let mut units_deployed = 0;
    let mut decision_time = Duration::ZERO;

    for _ in 0..config.turns {
        let summary = agent.play_turn(&mut board);
        structures_placed += summary.placements.perimeter;
        supports_placed += summary.placements.secondary;
        units_deployed += summary.placements.deployed;
        decision_time += summary.elapsed;
    }

    Ok(SkirmishResult {
        seed,
        turns_played: board.turn(),
        structures_placed,
        supports_placed,
        units_deployed,
        final_structure_balance: board.resource(Pool::Structure),
        final_mobile_balance: board.resource(Pool::Mobile),
        decision_time,
    })
}
