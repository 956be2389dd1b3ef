//! Game exploration command
//!
//! Loads the word pool, wires up the cache layers, runs the root evaluation,
//! and persists cache snapshots.

use crate::core::{CandidateSet, Word};
use crate::solver::{Evaluation, GuessPolicy, Player, ScoreCache, UniformHost};
use crate::wordlists::loader::load_from_file;
use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Configuration for one exploration run
pub struct ExploreConfig {
    /// Newline-delimited candidate word file
    pub word_file: PathBuf,
    /// Force this word as the first guess
    pub first_guess: Option<String>,
    /// Maximum search depth in turns; 0 = unbounded
    pub max_depth: u32,
    /// Draw guesses from this file instead of hard mode
    pub guess_file: Option<PathBuf>,
    /// Score cache snapshots to load as read-only layers
    pub cache_in: Vec<PathBuf>,
    /// Write the merged score cache here after the run
    pub cache_out: Option<PathBuf>,
    /// Write only this run's new cache entries here
    pub cache_out_updates: Option<PathBuf>,
    /// Parallel workers for the root guess enumeration
    pub workers: usize,
}

/// Result of an exploration run
pub struct ExploreResult {
    pub evaluation: Evaluation,
    pub pool_size: usize,
    pub forced_first: Option<Word>,
    pub cache_entries_written: usize,
    pub duration: Duration,
}

/// Run a full exploration per the configuration
///
/// # Errors
///
/// Returns an error if a word file cannot be read or contains no valid
/// words, the forced first guess is not a valid word, a cache snapshot
/// cannot be written, or the search inputs are unusable.
pub fn run_explore(config: &ExploreConfig) -> Result<ExploreResult> {
    let words = load_from_file(&config.word_file)
        .with_context(|| format!("Failed to read word file {}", config.word_file.display()))?;
    if words.is_empty() {
        bail!("No valid words in {}", config.word_file.display());
    }
    let candidates: CandidateSet = words.into_iter().collect();

    let policy = match &config.guess_file {
        Some(path) => {
            let pool = load_from_file(path)
                .with_context(|| format!("Failed to read guess file {}", path.display()))?;
            GuessPolicy::Pool(pool)
        }
        None => GuessPolicy::HardMode,
    };

    let forced_first = config
        .first_guess
        .as_deref()
        .map(Word::new)
        .transpose()
        .context("Invalid first guess")?;

    let mut cache = ScoreCache::new();
    cache.load(&config.cache_in);

    let max_depth = (config.max_depth > 0).then_some(config.max_depth);

    let mut player = Player::new(policy, cache);
    let started = Instant::now();
    let evaluation = player.start(
        &candidates,
        &UniformHost,
        max_depth,
        forced_first.as_ref(),
        config.workers.max(1),
    )?;
    let duration = started.elapsed();

    if let Some(path) = &config.cache_out {
        player
            .cache()
            .save_all(path)
            .with_context(|| format!("Failed to write cache {}", path.display()))?;
    }
    if let Some(path) = &config.cache_out_updates {
        player
            .cache()
            .save_updates(path)
            .with_context(|| format!("Failed to write cache updates {}", path.display()))?;
    }

    Ok(ExploreResult {
        evaluation,
        pool_size: candidates.len(),
        forced_first,
        cache_entries_written: player.cache().local_len(),
        duration,
    })
}
