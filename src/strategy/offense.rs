//! Randomized offensive deployment.

use crate::config::UnitRole;
use crate::game::{BoardSide, Coord, GameView, Pool};
use crate::rng::Rng;

/// Mobile-pool balance below which deployment is deferred entirely.
///
/// A trickle of single units is wasted against any defense; below this
/// threshold the phase does nothing and lets the pool grow for a turn.
pub const MIN_DEPLOY_BALANCE: f64 = 10.0;

/// Compute this turn's candidate deployment set.
///
/// Union of both home-edge enumerations, minus every coordinate currently
/// blocked by a stationary unit (own structures block own deployment).
/// Recomputed fresh each turn: board occupancy changes every turn, so the
/// set is never cached across turns.
#[must_use]
pub fn candidate_locations(view: &dyn GameView) -> Vec<Coord> {
    let mut candidates = view.edge_locations(BoardSide::BottomLeft);
    candidates.extend(view.edge_locations(BoardSide::BottomRight));
    candidates.retain(|&at| !view.has_stationary_unit(at));
    candidates
}

/// Spend the mobile pool on randomized disruptor deployments.
///
/// Picks uniformly at random from the candidate set until the pool can no
/// longer afford a disruptor or the set is empty. A successful deployment
/// does not remove its coordinate: mobile units may stack on one tile, so
/// repeated picks are legal and intentional. The set is a snapshot taken
/// before the loop and is never recomputed mid-loop.
///
/// Returns the number of units deployed.
pub(crate) fn deploy_disruptors(rng: &mut Rng, view: &mut dyn GameView) -> u32 {
    if view.resource(Pool::Mobile) < MIN_DEPLOY_BALANCE {
        return 0;
    }

    let mut candidates = candidate_locations(view);
    let cost = view.cost_of(UnitRole::Disruptor);
    if cost <= 0.0 {
        // A free unit would never drain the pool; resolution rejects this,
        // so only a misbehaving view can get here.
        return 0;
    }

    let mut deployed = 0;
    while view.resource(Pool::Mobile) >= cost && !candidates.is_empty() {
        let index = rng.next_index(candidates.len());
        let at = candidates[index];
        if view.attempt_place(UnitRole::Disruptor, at) {
            deployed += 1;
        } else {
            // Filtering said this tile was clear; if the service now
            // disagrees it will keep disagreeing, so drop the tile instead
            // of spinning on it.
            candidates.swap_remove(index);
        }
    }
    deployed
}
