//! The per-turn layered strategy.
//!
//! Each turn runs three sub-phases in a fixed order:
//!
//! 1. **Perimeter defense**: turret plan, then wall plan, in priority
//!    order. Deterministic, best-effort.
//! 2. **Secondary defense**: generator plan, spending whatever the
//!    perimeter left in the structure pool. Deterministic.
//! 3. **Offensive deployment**: disruptors on random unblocked home-edge
//!    tiles until the mobile pool runs dry.
//!
//! The ordering is a contract, not an accident of code layout: phases are
//! listed in [`TurnStrategy::PHASES`] and executed by iterating that list,
//! so perimeter spending is always visible to secondary affordability
//! checks, and offense always sees the final structure layout.

mod offense;
mod plans;

pub use offense::{MIN_DEPLOY_BALANCE, candidate_locations};
pub use plans::{PlacementPlan, StrategyPlans};

use crate::game::GameView;
use crate::rng::Rng;

/// A named strategy phase.
#[derive(Debug, Clone, Copy)]
pub struct Phase {
    /// Phase name, used in summaries and logs.
    pub name: &'static str,
    run: fn(&mut TurnStrategy, &mut dyn GameView) -> u32,
}

/// Placement counts for one decided turn, by phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhasePlacements {
    /// Perimeter structures placed (turrets and walls).
    pub perimeter: u32,
    /// Secondary structures placed (generators).
    pub secondary: u32,
    /// Mobile units deployed.
    pub deployed: u32,
}

impl PhasePlacements {
    /// Total placements across all phases.
    #[must_use]
    pub const fn total(self) -> u32 {
        self.perimeter + self.secondary + self.deployed
    }
}

/// The layered per-turn decision procedure.
///
/// Holds only turn-scoped state plus the seeded random source; all board
/// and resource state stays behind the [`GameView`] it is handed each turn.
#[derive(Debug, Clone)]
pub struct TurnStrategy {
    plans: StrategyPlans,
    rng: Rng,
}

impl TurnStrategy {
    /// The fixed phase order. Perimeter defense always has first claim on
    /// the structure pool; offense always runs last.
    pub const PHASES: [Phase; 3] = [
        Phase {
            name: "perimeter-defense",
            run: TurnStrategy::perimeter_phase,
        },
        Phase {
            name: "secondary-defense",
            run: TurnStrategy::secondary_phase,
        },
        Phase {
            name: "offensive-deployment",
            run: TurnStrategy::offense_phase,
        },
    ];

    /// Create a strategy with the default plans and the given RNG seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_plans(StrategyPlans::default(), seed)
    }

    /// Create a strategy with custom plans.
    #[must_use]
    pub fn with_plans(plans: StrategyPlans, seed: u64) -> Self {
        Self {
            plans,
            rng: Rng::new(seed),
        }
    }

    /// Run all phases in their fixed order against the view.
    ///
    /// Returns the per-phase placement counts. Runs until no further
    /// beneficial or affordable action remains; never errors, since every
    /// infeasible placement is an expected skip.
    pub fn decide_turn(&mut self, view: &mut dyn GameView) -> PhasePlacements {
        let mut counts = [0u32; 3];
        for (slot, phase) in counts.iter_mut().zip(Self::PHASES.iter()) {
            *slot = (phase.run)(self, view);
        }
        PhasePlacements {
            perimeter: counts[0],
            secondary: counts[1],
            deployed: counts[2],
        }
    }

    fn perimeter_phase(&mut self, view: &mut dyn GameView) -> u32 {
        let mut placed = 0;
        for plan in &self.plans.perimeter {
            placed += execute_plan(plan, view);
        }
        placed
    }

    fn secondary_phase(&mut self, view: &mut dyn GameView) -> u32 {
        let mut placed = 0;
        for plan in &self.plans.secondary {
            placed += execute_plan(plan, view);
        }
        placed
    }

    fn offense_phase(&mut self, view: &mut dyn GameView) -> u32 {
        offense::deploy_disruptors(&mut self.rng, view)
    }
}

/// Attempt every location in a plan, in priority order.
///
/// Best-effort: a failed legality check skips the location silently and the
/// plan continues. Returns the number of successful placements.
fn execute_plan(plan: &PlacementPlan, view: &mut dyn GameView) -> u32 {
    let mut placed = 0;
    for &at in &plan.locations {
        if view.can_place(plan.role, at) && view.attempt_place(plan.role, at) {
            placed += 1;
        }
    }
    placed
}
