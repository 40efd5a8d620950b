//! In-memory board service for local skirmishes and tests.

use std::collections::HashMap;

use crate::config::{UnitRole, UnitTypeTable};
use crate::game::{BoardSide, Coord, GameView, HALF_ARENA, Pool, in_arena, on_home_edge};

/// Default starting balance of the structure pool.
pub(crate) const DEFAULT_STRUCTURE_BALANCE: f64 = 25.0;

/// Default starting balance of the mobile pool.
pub(crate) const DEFAULT_MOBILE_BALANCE: f64 = 5.0;

/// An in-memory implementation of [`GameView`].
///
/// Covers the agent's home half of the diamond arena: structure placement
/// anywhere in the home half, mobile deployment on the two home edges, one
/// stationary unit per tile, unbounded mobile stacking. Each submitted turn
/// credits both pools with their per-turn income.
///
/// This is the stand-in for the external engine in skirmishes, benchmarks
/// and tests; the strategy itself only ever sees it as a `dyn GameView`.
#[derive(Debug, Clone)]
pub struct Board {
    units: UnitTypeTable,
    structures: HashMap<Coord, UnitRole>,
    mobile: HashMap<Coord, u32>,
    structure_balance: f64,
    mobile_balance: f64,
    structure_income: f64,
    mobile_income: f64,
    turn: u32,
}

impl Board {
    /// Create an empty board with default starting balances.
    #[must_use]
    pub fn new(units: UnitTypeTable) -> Self {
        Self::with_balances(units, DEFAULT_STRUCTURE_BALANCE, DEFAULT_MOBILE_BALANCE)
    }

    /// Create an empty board with explicit starting balances.
    #[must_use]
    pub fn with_balances(units: UnitTypeTable, structure: f64, mobile: f64) -> Self {
        Self {
            units,
            structures: HashMap::new(),
            mobile: HashMap::new(),
            structure_balance: structure,
            mobile_balance: mobile,
            structure_income: 0.0,
            mobile_income: 0.0,
            turn: 0,
        }
    }

    /// Set the per-turn income credited to each pool on submit.
    pub fn set_income(&mut self, structure: f64, mobile: f64) {
        self.structure_income = structure;
        self.mobile_income = mobile;
    }

    /// Place a stationary unit without legality checks or resource debit.
    ///
    /// Scenario setup hook: seeds occupancy the way a previous turn (or the
    /// opponent's structures bleeding over the midline rules) would have.
    /// Returns `false` if the coordinate is outside the arena or the role is
    /// not stationary.
    pub fn force_structure(&mut self, at: Coord, role: UnitRole) -> bool {
        if !in_arena(at) || !role.is_stationary() {
            return false;
        }
        self.structures.insert(at, role);
        true
    }

    /// Number of stationary units on the board.
    #[must_use]
    pub fn structure_count(&self) -> usize {
        self.structures.len()
    }

    /// Total mobile units deployed across all tiles.
    #[must_use]
    pub fn mobile_count(&self) -> u32 {
        self.mobile.values().sum()
    }

    /// The stationary unit at a coordinate, if any.
    #[must_use]
    pub fn structure_at(&self, at: Coord) -> Option<UnitRole> {
        self.structures.get(&at).copied()
    }

    /// Mobile units stacked on a coordinate.
    #[must_use]
    pub fn mobile_at(&self, at: Coord) -> u32 {
        self.mobile.get(&at).copied().unwrap_or(0)
    }

    fn pool_for(role: UnitRole) -> Pool {
        if role.is_stationary() {
            Pool::Structure
        } else {
            Pool::Mobile
        }
    }

    fn placement_legal(&self, role: UnitRole, at: Coord) -> bool {
        if !in_arena(at) || at.y >= HALF_ARENA {
            return false;
        }
        if role.is_stationary() {
            // Structures need an empty tile.
            !self.structures.contains_key(&at) && self.mobile_at(at) == 0
        } else {
            // Mobile units deploy on unblocked home edges and may stack.
            on_home_edge(at) && !self.structures.contains_key(&at)
        }
    }
}

impl GameView for Board {
    fn turn(&self) -> u32 {
        self.turn
    }

    fn resource(&self, pool: Pool) -> f64 {
        match pool {
            Pool::Structure => self.structure_balance,
            Pool::Mobile => self.mobile_balance,
        }
    }

    fn cost_of(&self, role: UnitRole) -> f64 {
        self.units.cost(role)
    }

    fn can_place(&self, role: UnitRole, at: Coord) -> bool {
        self.placement_legal(role, at) && self.resource(Self::pool_for(role)) >= self.cost_of(role)
    }

    fn attempt_place(&mut self, role: UnitRole, at: Coord) -> bool {
        if !self.can_place(role, at) {
            return false;
        }

        let cost = self.cost_of(role);
        match Self::pool_for(role) {
            Pool::Structure => self.structure_balance -= cost,
            Pool::Mobile => self.mobile_balance -= cost,
        }

        if role.is_stationary() {
            self.structures.insert(at, role);
        } else {
            *self.mobile.entry(at).or_insert(0) += 1;
        }
        true
    }

    fn has_stationary_unit(&self, at: Coord) -> bool {
        self.structures.contains_key(&at)
    }

    fn edge_locations(&self, side: BoardSide) -> Vec<Coord> {
        side.edge_locations()
    }

    fn submit_turn(&mut self) {
        self.turn += 1;
        self.structure_balance += self.structure_income;
        self.mobile_balance += self.mobile_income;
    }
}
