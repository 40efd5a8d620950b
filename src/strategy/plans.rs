//! Fixed placement plans for the defensive phases.

use crate::config::UnitRole;
use crate::game::Coord;

/// Turret anchors: the arena corners first, then the mid-field line.
const TURRET_ANCHORS: [(u16, u16); 6] = [(0, 13), (27, 13), (17, 10), (11, 10), (4, 10), (23, 10)];

/// Wall screen in front of the lower funnel.
const WALL_SCREEN: [(u16, u16); 6] = [(9, 6), (18, 6), (13, 2), (14, 2), (13, 7), (14, 7)];

/// Generator slots tucked behind the back row.
const GENERATOR_SLOTS: [(u16, u16); 2] = [(16, 13), (18, 13)];

/// A priority-ordered placement plan for a single role.
///
/// Plans are fixed at design time; priority is simply list order, so the
/// cheapest way to re-prioritize is to reorder the list.
#[derive(Debug, Clone)]
pub struct PlacementPlan {
    /// Role placed at each location in the plan.
    pub role: UnitRole,
    /// Locations in priority order (highest priority first).
    pub locations: Vec<Coord>,
}

impl PlacementPlan {
    /// Create a plan from a role and its priority-ordered locations.
    #[must_use]
    pub fn new(role: UnitRole, locations: Vec<Coord>) -> Self {
        Self { role, locations }
    }

    fn from_pairs(role: UnitRole, pairs: &[(u16, u16)]) -> Self {
        Self::new(role, pairs.iter().map(|&(x, y)| Coord::new(x, y)).collect())
    }
}

/// The plan groups driving the two defensive phases.
///
/// Perimeter plans run first and therefore have first claim on the shared
/// structure pool; secondary plans spend whatever is left.
#[derive(Debug, Clone)]
pub struct StrategyPlans {
    /// Perimeter plans, executed in order (turrets before walls).
    pub perimeter: Vec<PlacementPlan>,
    /// Secondary plans (resource generators behind the perimeter).
    pub secondary: Vec<PlacementPlan>,
}

impl Default for StrategyPlans {
    fn default() -> Self {
        Self {
            perimeter: vec![
                PlacementPlan::from_pairs(UnitRole::Turret, &TURRET_ANCHORS),
                PlacementPlan::from_pairs(UnitRole::Wall, &WALL_SCREEN),
            ],
            secondary: vec![PlacementPlan::from_pairs(
                UnitRole::Generator,
                &GENERATOR_SLOTS,
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{HALF_ARENA, in_arena};

    #[test]
    fn test_default_plans_are_in_home_half() {
        let plans = StrategyPlans::default();
        for plan in plans.perimeter.iter().chain(plans.secondary.iter()) {
            for &at in &plan.locations {
                assert!(in_arena(at), "{at:?} outside the arena");
                assert!(at.y < HALF_ARENA, "{at:?} outside the home half");
            }
        }
    }

    #[test]
    fn test_default_plan_roles() {
        let plans = StrategyPlans::default();
        assert_eq!(plans.perimeter[0].role, UnitRole::Turret);
        assert_eq!(plans.perimeter[1].role, UnitRole::Wall);
        assert_eq!(plans.secondary[0].role, UnitRole::Generator);
    }

    #[test]
    fn test_priority_order_is_list_order() {
        let plans = StrategyPlans::default();
        // The two corner anchors outrank everything else.
        assert_eq!(plans.perimeter[0].locations[0], Coord::new(0, 13));
        assert_eq!(plans.perimeter[0].locations[1], Coord::new(27, 13));
    }
}
