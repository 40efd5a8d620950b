//! Output formatting utilities for the CLI.

use parapet::{SkirmishResult, TurnSummary};
use serde::Serialize;

/// Format one turn's summary as a log line.
pub(super) fn format_turn(summary: &TurnSummary) -> String {
    format!(
        "turn {:>4}: perimeter {}, secondary {}, deployed {} ({:.2} ms)",
        summary.turn,
        summary.placements.perimeter,
        summary.placements.secondary,
        summary.placements.deployed,
        summary.elapsed.as_secs_f64() * 1000.0
    )
}

/// JSON-serializable skirmish result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSkirmishResult {
    /// Random seed used.
    pub(super) seed: u64,
    /// Turns played.
    pub(super) turns_played: u32,
    /// Perimeter structures placed.
    pub(super) structures_placed: u32,
    /// Secondary structures placed.
    pub(super) supports_placed: u32,
    /// Mobile units deployed.
    pub(super) units_deployed: u32,
    /// Final structure-pool balance.
    pub(super) final_structure_balance: f64,
    /// Final mobile-pool balance.
    pub(super) final_mobile_balance: f64,
    /// Total decision time in milliseconds.
    pub(super) decision_ms: f64,
}

impl JsonSkirmishResult {
    /// Create from a `SkirmishResult`.
    pub(super) fn from_result(result: &SkirmishResult) -> Self {
        Self {
            seed: result.seed,
            turns_played: result.turns_played,
            structures_placed: result.structures_placed,
            supports_placed: result.supports_placed,
            units_deployed: result.units_deployed,
            final_structure_balance: result.final_structure_balance,
            final_mobile_balance: result.final_mobile_balance,
            decision_ms: result.decision_time.as_secs_f64() * 1000.0,
        }
    }
}

/// Format a skirmish result as human-readable text.
pub(super) fn format_skirmish_text(result: &SkirmishResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("Skirmish Result (seed: {})\n", result.seed));
    output.push_str(&format!("  Turns: {}\n", result.turns_played));
    output.push_str(&format!(
        "  Perimeter structures: {}\n",
        result.structures_placed
    ));
    output.push_str(&format!(
        "  Secondary structures: {}\n",
        result.supports_placed
    ));
    output.push_str(&format!("  Units deployed: {}\n", result.units_deployed));
    output.push_str(&format!(
        "  Final balances: structure {:.1}, mobile {:.1}\n",
        result.final_structure_balance, result.final_mobile_balance
    ));
    output.push_str(&format!(
        "  Decision time: {:.2} ms total\n",
        result.decision_time.as_secs_f64() * 1000.0
    ));

    output
}

/// Aggregated statistics over a batch of skirmishes.
#[derive(Debug, Default, Clone, Copy)]
pub(super) struct BatchStats {
    /// Games played.
    pub(super) games_played: u64,
    /// Total turns across all games.
    total_turns: u64,
    /// Total perimeter structures placed.
    total_structures: u64,
    /// Total secondary structures placed.
    total_supports: u64,
    /// Total mobile units deployed.
    total_deployed: u64,
    /// Sum of final structure balances.
    sum_structure_balance: f64,
    /// Sum of final mobile balances.
    sum_mobile_balance: f64,
    /// Total decision time in seconds.
    total_decision_secs: f64,
}

impl BatchStats {
    /// Fold one skirmish result into the stats.
    pub(super) fn add_result(&mut self, result: &SkirmishResult) {
        self.games_played += 1;
        self.total_turns += u64::from(result.turns_played);
        self.total_structures += u64::from(result.structures_placed);
        self.total_supports += u64::from(result.supports_placed);
        self.total_deployed += u64::from(result.units_deployed);
        self.sum_structure_balance += result.final_structure_balance;
        self.sum_mobile_balance += result.final_mobile_balance;
        self.total_decision_secs += result.decision_time.as_secs_f64();
    }

    /// Merge another accumulator into this one.
    pub(super) fn merge(&mut self, other: &BatchStats) {
        self.games_played += other.games_played;
        self.total_turns += other.total_turns;
        self.total_structures += other.total_structures;
        self.total_supports += other.total_supports;
        self.total_deployed += other.total_deployed;
        self.sum_structure_balance += other.sum_structure_balance;
        self.sum_mobile_balance += other.sum_mobile_balance;
        self.total_decision_secs += other.total_decision_secs;
    }

    fn per_game(&self, total: u64) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            precise_div(total, self.games_played)
        }
    }

    /// Average perimeter structures per game.
    pub(super) fn avg_structures(&self) -> f64 {
        self.per_game(self.total_structures)
    }

    /// Average secondary structures per game.
    pub(super) fn avg_supports(&self) -> f64 {
        self.per_game(self.total_supports)
    }

    /// Average mobile units deployed per game.
    pub(super) fn avg_deployed(&self) -> f64 {
        self.per_game(self.total_deployed)
    }

    /// Average final structure balance.
    pub(super) fn avg_structure_balance(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                self.sum_structure_balance / self.games_played as f64
            }
        }
    }

    /// Average final mobile balance.
    pub(super) fn avg_mobile_balance(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                self.sum_mobile_balance / self.games_played as f64
            }
        }
    }

    /// Average decision time per turn in microseconds.
    pub(super) fn avg_decision_us(&self) -> f64 {
        if self.total_turns == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            {
                self.total_decision_secs * 1_000_000.0 / self.total_turns as f64
            }
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn precise_div(num: u64, den: u64) -> f64 {
    num as f64 / den as f64
}

/// Format batch statistics as human-readable text.
pub(super) fn format_batch_text(stats: &BatchStats) -> String {
    let mut output = String::new();

    output.push_str(&format!("Batch Results ({} games)\n", stats.games_played));
    output.push_str(&format!(
        "  Avg perimeter structures: {:.2}\n",
        stats.avg_structures()
    ));
    output.push_str(&format!(
        "  Avg secondary structures: {:.2}\n",
        stats.avg_supports()
    ));
    output.push_str(&format!(
        "  Avg units deployed:       {:.2}\n",
        stats.avg_deployed()
    ));
    output.push_str(&format!(
        "  Avg final balances:       structure {:.1}, mobile {:.1}\n",
        stats.avg_structure_balance(),
        stats.avg_mobile_balance()
    ));
    output.push_str(&format!(
        "  Avg decision time:        {:.1} us/turn\n",
        stats.avg_decision_us()
    ));

    output
}

/// Format batch statistics as CSV.
pub(super) fn format_batch_csv(stats: &BatchStats) -> String {
    let mut output = String::new();
    output.push_str(
        "games,avg_structures,avg_supports,avg_deployed,avg_structure_balance,avg_mobile_balance,avg_decision_us\n",
    );
    output.push_str(&format!(
        "{},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}\n",
        stats.games_played,
        stats.avg_structures(),
        stats.avg_supports(),
        stats.avg_deployed(),
        stats.avg_structure_balance(),
        stats.avg_mobile_balance(),
        stats.avg_decision_us()
    ));
    output
}

/// JSON-serializable batch result.
#[derive(Debug, Serialize)]
pub(super) struct JsonBatchResult {
    /// Games played.
    pub(super) games: u64,
    /// Average perimeter structures per game.
    pub(super) avg_structures: f64,
    /// Average secondary structures per game.
    pub(super) avg_supports: f64,
    /// Average mobile units deployed per game.
    pub(super) avg_deployed: f64,
    /// Average final structure balance.
    pub(super) avg_structure_balance: f64,
    /// Average final mobile balance.
    pub(super) avg_mobile_balance: f64,
    /// Average decision time per turn in microseconds.
    pub(super) avg_decision_us: f64,
}

impl JsonBatchResult {
    /// Create from batch statistics.
    pub(super) fn from_stats(stats: &BatchStats) -> Self {
        Self {
            games: stats.games_played,
            avg_structures: stats.avg_structures(),
            avg_supports: stats.avg_supports(),
            avg_deployed: stats.avg_deployed(),
            avg_structure_balance: stats.avg_structure_balance(),
            avg_mobile_balance: stats.avg_mobile_balance(),
            avg_decision_us: stats.avg_decision_us(),
        }
    }
}
