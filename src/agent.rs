//! Per-turn orchestration around the strategy.

use std::time::{Duration, Instant};

use crate::config::{GameConfig, UnitTypeTable};
use crate::error::ConfigError;
use crate::game::GameView;
use crate::strategy::{PhasePlacements, StrategyPlans, TurnStrategy};

/// Observability record for one decided turn.
///
/// Reported to the caller after the turn is submitted. Purely informational:
/// nothing in it ever feeds back into a decision.
#[derive(Debug, Clone, Copy)]
pub struct TurnSummary {
    /// Turn number the decisions were made for.
    pub turn: u32,
    /// Placement counts per phase.
    pub placements: PhasePlacements,
    /// Wall-clock duration of the decision computation.
    pub elapsed: Duration,
}

/// A competing agent: the resolved unit table plus the turn strategy.
///
/// The unit table is resolved exactly once from the game-start
/// configuration and is read-only from then on. Construction fails if the
/// configuration is malformed; there is no partial setup.
#[derive(Debug, Clone)]
pub struct Agent {
    units: UnitTypeTable,
    strategy: TurnStrategy,
}

impl Agent {
    /// Build an agent from the game-start configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit table cannot be resolved from the
    /// payload (missing entry, empty identifier, invalid cost).
    pub fn from_config(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self {
            units: UnitTypeTable::resolve(config)?,
            strategy: TurnStrategy::new(seed),
        })
    }

    /// Build an agent with custom placement plans.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Agent::from_config`].
    pub fn with_plans(
        config: &GameConfig,
        plans: StrategyPlans,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            units: UnitTypeTable::resolve(config)?,
            strategy: TurnStrategy::with_plans(plans, seed),
        })
    }

    /// The resolved unit table (immutable for the rest of the game).
    #[must_use]
    pub fn units(&self) -> &UnitTypeTable {
        &self.units
    }

    /// Decide one turn, submit it, and report what happened.
    ///
    /// Runs the three strategy phases in their fixed order against the
    /// view, finalizes the turn through the service, and measures the
    /// elapsed wall-clock decision time.
    pub fn play_turn(&mut self, view: &mut dyn GameView) -> TurnSummary {
        let started = Instant::now();
        let turn = view.turn();

        let placements = self.strategy.decide_turn(view);
        view.submit_turn();

        TurnSummary {
            turn,
            placements,
            elapsed: started.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UnitRole;
    use crate::game::Board;

    #[test]
    fn test_malformed_config_fails_construction() {
        let mut config = GameConfig::builtin();
        config.unit_information.clear();
        assert!(Agent::from_config(&config, 1).is_err());
    }

    #[test]
    fn test_play_turn_submits_and_reports() {
        let config = GameConfig::builtin();
        let mut agent = Agent::from_config(&config, 42).unwrap();
        let mut board = Board::with_balances(agent.units().clone(), 100.0, 20.0);

        let summary = agent.play_turn(&mut board);

        assert_eq!(summary.turn, 0);
        assert!(summary.placements.perimeter > 0);
        assert!(summary.placements.deployed > 0);
        // The turn was finalized through the service.
        assert_eq!(board.turn(), 1);

        let next = agent.play_turn(&mut board);
        assert_eq!(next.turn, 1);
    }

    #[test]
    fn test_units_table_is_resolved_once() {
        let config = GameConfig::builtin();
        let agent = Agent::from_config(&config, 1).unwrap();
        assert_eq!(agent.units().id(UnitRole::Disruptor), "SI");
    }
}
