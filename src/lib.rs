// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Parapet: a deterministic turn-strategy agent for grid tower-defense
//! competitions.
//!
//! Each turn the engine hands the agent a view over shared board state and
//! blocks until the agent has decided and submitted its placements. The
//! decision is a fixed-order layered strategy:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │          Turn Orchestration         │  agent
//! ├─────────────────────────────────────┤
//! │  Perimeter → Secondary → Offense    │  strategy
//! ├─────────────────────────────────────┤
//! │        Board Service (GameView)     │  game
//! └─────────────────────────────────────┘
//! ```
//!
//! Determinism: given a seed, a configuration and a board state, a turn's
//! decisions are fully reproducible. The only random element (offensive
//! deployment targeting) draws from an injectable seeded PRNG.

pub mod agent;
pub mod config;
pub mod error;
pub mod game;
pub mod rng;
pub mod skirmish;
pub mod strategy;

pub use agent::{Agent, TurnSummary};
pub use config::{GameConfig, UnitInfo, UnitRole, UnitTypeTable};
pub use error::ConfigError;
pub use game::{Board, BoardSide, Coord, GameView, Pool};
pub use rng::Rng;
pub use skirmish::{SkirmishConfig, SkirmishResult, run_skirmish};
pub use strategy::{PhasePlacements, PlacementPlan, StrategyPlans, TurnStrategy};
