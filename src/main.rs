//! Wordle Optimal - CLI
//!
//! Explore possible Wordle games and find the optimal guesses, or deduce
//! the target word from shared color grids.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_optimal::{
    commands::{DeduceConfig, ExploreConfig, run_deduce, run_explore},
    output::{print_deduce_result, print_explore_result},
};

#[derive(Parser)]
#[command(
    name = "wordle_optimal",
    about = "Optimal Wordle guess explorer using expectimax game-tree search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explore all possible games and report the optimal guess
    Explore {
        /// Newline-delimited candidate word file
        word_file: PathBuf,

        /// Force this word as the first guess
        start_word: Option<String>,

        /// Maximum search depth in turns (0 = unbounded)
        #[arg(short = 'd', long, default_value_t = 0)]
        max_depth: u32,

        /// Draw guesses from this word file instead of hard mode
        #[arg(long)]
        guess_file: Option<PathBuf>,

        /// Score cache snapshot(s) to load, first match wins
        #[arg(long = "cache-in", num_args = 1..)]
        cache_in: Vec<PathBuf>,

        /// Write the merged score cache here after the run
        #[arg(long = "cache-out")]
        cache_out: Option<PathBuf>,

        /// Write only this run's new cache entries here
        #[arg(long = "cache-out-updates")]
        cache_out_updates: Option<PathBuf>,

        /// Number of parallel workers (default: all cores)
        #[arg(short = 'j', long)]
        workers: Option<usize>,

        /// Print the turn-count histogram
        #[arg(long)]
        histogram: bool,

        /// Histogram bar width
        #[arg(long, default_value_t = 72)]
        histogram_width: usize,
    },

    /// Deduce the target word from shared color grids
    Deduce {
        /// Words the computer might have chosen
        target_file: PathBuf,

        /// Words people are allowed to guess
        guess_file: PathBuf,

        /// Shared games, one grid row per line (default: stdin)
        shares: Option<PathBuf>,

        /// Lookup table location: loaded when present, built and saved otherwise
        #[arg(long)]
        table: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Explore {
            word_file,
            start_word,
            max_depth,
            guess_file,
            cache_in,
            cache_out,
            cache_out_updates,
            workers,
            histogram,
            histogram_width,
        } => {
            let workers = workers.unwrap_or_else(default_workers);
            let config = ExploreConfig {
                word_file,
                first_guess: start_word,
                max_depth,
                guess_file,
                cache_in,
                cache_out,
                cache_out_updates,
                workers,
            };

            let result = run_explore(&config)?;
            print_explore_result(&result, histogram, histogram_width);
            Ok(())
        }
        Commands::Deduce {
            target_file,
            guess_file,
            shares,
            table,
        } => {
            let config = DeduceConfig {
                target_file,
                guess_file,
                shares_file: shares,
                table_path: table,
            };

            let result = run_deduce(&config)?;
            print_deduce_result(&result);
            Ok(())
        }
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism().map_or(1, std::num::NonZero::get)
}
