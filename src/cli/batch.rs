//! Batch command implementation.

use std::path::PathBuf;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use parapet::{SkirmishConfig, run_skirmish};
use rayon::prelude::*;

use super::output::{BatchStats, JsonBatchResult, format_batch_csv, format_batch_text};
use super::run::load_config;
use super::{BatchFormat, CliError};

/// Execute the batch command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or resolved.
pub(crate) fn execute(
    config: Option<PathBuf>,
    games: u64,
    seed: Option<u64>,
    threads: Option<usize>,
    turns: u32,
    format: BatchFormat,
    progress: bool,
) -> Result<(), CliError> {
    let game_config = load_config(config)?;

    // Resolve once up front so a malformed config fails before any games run.
    parapet::UnitTypeTable::resolve(&game_config)?;

    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    // Base seed
    let base_seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let skirmish_config = SkirmishConfig {
        turns,
        ..SkirmishConfig::default()
    };

    // Progress bar
    let pb = if progress {
        let pb = ProgressBar::new(games);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec})")
                .expect("valid template")
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();

    // Run games in parallel using lock-free fold/reduce: each thread folds
    // into its own BatchStats, merged at the end (no atomics in the hot path)
    let stats = (0..games)
        .into_par_iter()
        .fold(BatchStats::default, |mut local_stats, i| {
            let game_seed = base_seed.wrapping_add(i);
            if let Ok(result) = run_skirmish(game_seed, &game_config, &skirmish_config) {
                local_stats.add_result(&result);
            }
            local_stats
        })
        .reduce(BatchStats::default, |mut a, b| {
            a.merge(&b);
            a
        });

    // Update progress bar after completion (no per-game overhead)
    if let Some(pb) = pb {
        pb.set_position(stats.games_played);
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();
    let games_per_sec = if duration.as_secs_f64() > 0.0 {
        #[allow(clippy::cast_precision_loss)]
        {
            stats.games_played as f64 / duration.as_secs_f64()
        }
    } else {
        0.0
    };

    match format {
        BatchFormat::Text => {
            println!();
            print!("{}", format_batch_text(&stats));
            println!();
            println!(
                "Duration: {:.2}s ({:.0} games/sec)",
                duration.as_secs_f64(),
                games_per_sec
            );
        }
        BatchFormat::Json => {
            let json_result = JsonBatchResult::from_stats(&stats);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
        BatchFormat::Csv => {
            print!("{}", format_batch_csv(&stats));
        }
    }

    Ok(())
}
