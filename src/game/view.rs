//! The boundary contract between the strategy and the board service.

use crate::config::UnitRole;
use crate::game::{BoardSide, Coord};

/// The two regenerating resource pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    /// Spent on stationary defensive structures.
    Structure,
    /// Spent on deployable mobile units.
    Mobile,
}

/// Read/mutate handle to one turn's board-and-resource state.
///
/// Implemented by the engine-facing board service. The strategy is a pure
/// consumer of these operations: legality checking, resource accounting and
/// occupancy all live behind this trait and are never re-implemented on the
/// strategy side.
///
/// All mutation happens through [`attempt_place`](GameView::attempt_place),
/// which is atomic per call: it either places the unit and debits the owning
/// pool, or leaves the state untouched and returns `false`. Infeasible
/// placements are an expected, frequent outcome and are reported as a status
/// value, not an error.
pub trait GameView {
    /// Current turn number (0-indexed).
    fn turn(&self) -> u32;

    /// Current balance of the given resource pool.
    fn resource(&self, pool: Pool) -> f64;

    /// Resource cost to place one unit of the given role.
    fn cost_of(&self, role: UnitRole) -> f64;

    /// Legality check for a placement: bounds, occupancy and affordability.
    fn can_place(&self, role: UnitRole, at: Coord) -> bool;

    /// Attempt a placement; debits the owning pool and returns `true` on
    /// success.
    fn attempt_place(&mut self, role: UnitRole, at: Coord) -> bool;

    /// Whether a stationary unit currently occupies the coordinate.
    fn has_stationary_unit(&self, at: Coord) -> bool;

    /// Enumerate the deployable edge coordinates for a home side.
    fn edge_locations(&self, side: BoardSide) -> Vec<Coord>;

    /// Finalize this turn and transmit all placements to the engine.
    fn submit_turn(&mut self);
}
