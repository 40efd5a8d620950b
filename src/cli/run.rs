//! Run command implementation.

use std::path::PathBuf;
use std::time::Duration;

use parapet::{Agent, Board, GameConfig, GameView, Pool, SkirmishResult};

use super::output::{JsonSkirmishResult, format_skirmish_text, format_turn};
use super::{CliError, OutputFormat};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or resolved.
pub(crate) fn execute(
    config: Option<PathBuf>,
    seed: Option<u64>,
    turns: u32,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let game_config = load_config(config)?;

    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let mut agent = Agent::from_config(&game_config, seed)?;
    let mut board = Board::new(agent.units().clone());
    board.set_income(5.0, 5.0);

    if !quiet && format == OutputFormat::Text {
        println!("Running skirmish with seed {seed}...");
        println!();
    }

    let mut structures_placed = 0;
    let mut supports_placed = 0;
    let mut units_deployed = 0;
    let mut decision_time = Duration::ZERO;

    for _ in 0..turns {
        let summary = agent.play_turn(&mut board);
        if !quiet && format == OutputFormat::Text {
            println!("{}", format_turn(&summary));
        }
        structures_placed += summary.placements.perimeter;
        supports_placed += summary.placements.secondary;
        units_deployed += summary.placements.deployed;
        decision_time += summary.elapsed;
    }

    let result = SkirmishResult {
        seed,
        turns_played: board.turn(),
        structures_placed,
        supports_placed,
        units_deployed,
        final_structure_balance: board.resource(Pool::Structure),
        final_mobile_balance: board.resource(Pool::Mobile),
        decision_time,
    };

    match format {
        OutputFormat::Text => {
            if !quiet {
                println!();
            }
            print!("{}", format_skirmish_text(&result));
        }
        OutputFormat::Json => {
            let json_result = JsonSkirmishResult::from_result(&result);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Load a configuration file, falling back to the built-in ruleset.
pub(crate) fn load_config(path: Option<PathBuf>) -> Result<GameConfig, CliError> {
    match path {
        Some(path) => GameConfig::from_path(&path)
            .map_err(|e| CliError::new(format!("Failed to load {}: {e}", path.display()))),
        None => Ok(GameConfig::builtin()),
    }
}
