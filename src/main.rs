//! Parapet CLI - run and inspect deterministic tower-defense skirmishes.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// Parapet - a deterministic turn-strategy agent
#[derive(Parser, Debug)]
#[command(name = "parapet")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a single seeded skirmish against the local board
    Run {
        /// Engine configuration JSON (default: built-in ruleset)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of turns (default: 100)
        #[arg(short, long, default_value = "100")]
        turns: u32,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress turn-by-turn output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run mass parallel skirmishes and aggregate statistics
    Batch {
        /// Engine configuration JSON (default: built-in ruleset)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Number of games to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Turns per game (default: 100)
        #[arg(short, long, default_value = "100")]
        turns: u32,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::BatchFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },

    /// Validate a configuration file and print the resolved unit table
    Validate {
        /// Configuration JSON file
        #[arg(required = true)]
        config: std::path::PathBuf,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Run {
            config,
            seed,
            turns,
            format,
            quiet,
        } => cli::run::execute(config, seed, turns, format, quiet),

        Commands::Batch {
            config,
            games,
            seed,
            threads,
            turns,
            format,
            progress,
        } => cli::batch::execute(config, games, seed, threads, turns, format, progress),

        Commands::Validate { config } => cli::validate::execute(config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
