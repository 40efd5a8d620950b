//! Property-based tests for the deployment loop and board accounting.
//!
//! Run with: cargo test --release prop_strategy

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use parapet::{
    Agent, Board, GameConfig, GameView, Pool, StrategyPlans, UnitInfo, UnitRole,
    strategy::candidate_locations,
};

/// A config with a parameterised disruptor cost and no-op defense costs.
fn config_with_disruptor_cost(cost: f64) -> GameConfig {
    let units = [
        ("FF", 1.0),
        ("EF", 4.0),
        ("DF", 3.0),
        ("PI", 1.0),
        ("EI", 3.0),
        ("SI", cost),
    ];
    GameConfig {
        unit_information: units
            .iter()
            .map(|&(shorthand, c)| UnitInfo {
                shorthand: shorthand.to_string(),
                cost: c,
            })
            .collect(),
    }
}

fn offense_only(config: &GameConfig, seed: u64) -> Agent {
    let plans = StrategyPlans {
        perimeter: Vec::new(),
        secondary: Vec::new(),
    };
    Agent::with_plans(config, plans, seed).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Deployment count never exceeds what the mobile pool can afford, and
    /// the final balance is the starting balance minus exact spend.
    #[test]
    fn prop_deployment_respects_pool(
        balance in 0.0f64..500.0,
        cost in 0.5f64..20.0,
        seed in any::<u64>()
    ) {
        let config = config_with_disruptor_cost(cost);
        let mut agent = offense_only(&config, seed);
        let mut board = Board::with_balances(agent.units().clone(), 0.0, balance);

        let summary = agent.play_turn(&mut board);
        let deployed = summary.placements.deployed;

        prop_assert!(f64::from(deployed) * cost <= balance + 1e-9);
        let expected = balance - f64::from(deployed) * cost;
        prop_assert!((board.resource(Pool::Mobile) - expected).abs() < 1e-9);
        prop_assert!(board.resource(Pool::Mobile) >= -1e-9);
    }

    /// Below the activation threshold the offense phase is a strict no-op.
    #[test]
    fn prop_below_threshold_never_deploys(
        balance in 0.0f64..10.0,
        cost in 0.5f64..20.0,
        seed in any::<u64>()
    ) {
        // The half-open range keeps balance strictly below the threshold.
        let config = config_with_disruptor_cost(cost);
        let mut agent = offense_only(&config, seed);
        let mut board = Board::with_balances(agent.units().clone(), 0.0, balance);

        let summary = agent.play_turn(&mut board);

        prop_assert_eq!(summary.placements.deployed, 0);
        prop_assert_eq!(board.mobile_count(), 0);
    }

    /// Deployments only ever land on unblocked home edge tiles, for any
    /// blocking pattern.
    #[test]
    fn prop_deploys_avoid_blocked_edges(
        blocked_mask in any::<u32>(),
        seed in any::<u64>()
    ) {
        let config = config_with_disruptor_cost(1.0);
        let mut agent = offense_only(&config, seed);
        let mut board = Board::with_balances(agent.units().clone(), 0.0, 40.0);

        let edges = candidate_locations(&board);
        let mut blocked = Vec::new();
        for (i, &at) in edges.iter().enumerate() {
            if blocked_mask & (1 << (i % 32)) != 0 {
                board.force_structure(at, UnitRole::Wall);
                blocked.push(at);
            }
        }

        agent.play_turn(&mut board);

        for at in blocked {
            prop_assert_eq!(board.mobile_at(at), 0);
        }
    }

    /// The same seed and starting state always yield identical decisions.
    #[test]
    fn prop_decisions_deterministic_by_seed(
        balance in 0.0f64..200.0,
        seed in any::<u64>()
    ) {
        let config = GameConfig::builtin();

        let run = |seed: u64| {
            let mut agent = offense_only(&config, seed);
            let mut board = Board::with_balances(agent.units().clone(), 0.0, balance);
            let summary = agent.play_turn(&mut board);
            let mut stacks: Vec<_> = candidate_locations(&Board::with_balances(
                agent.units().clone(),
                0.0,
                0.0,
            ))
            .into_iter()
            .map(|at| board.mobile_at(at))
            .collect();
            stacks.push(summary.placements.deployed);
            stacks
        };

        prop_assert_eq!(run(seed), run(seed));
    }

    /// A full skirmish never panics and never drives a balance negative.
    #[test]
    fn prop_skirmish_balances_stay_non_negative(
        seed in any::<u64>(),
        turns in 1u32..40
    ) {
        let game_config = GameConfig::builtin();
        let config = parapet::SkirmishConfig {
            turns,
            ..parapet::SkirmishConfig::default()
        };

        let result = parapet::run_skirmish(seed, &game_config, &config).unwrap();

        prop_assert_eq!(result.turns_played, turns);
        prop_assert!(result.final_structure_balance >= -1e-9);
        prop_assert!(result.final_mobile_balance >= -1e-9);
    }
}
