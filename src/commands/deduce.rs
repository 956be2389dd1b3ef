//! Share deduction command
//!
//! Loads the word lists, obtains the lookup table (from disk when a saved
//! one exists, otherwise built and optionally saved), reads the shared
//! grids, and narrows the targets.

use crate::core::Word;
use crate::deduce::{ShareTable, canonicalize_blocks};
use crate::wordlists::loader::load_from_file;
use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Configuration for one deduction run
pub struct DeduceConfig {
    /// Words the host might have chosen
    pub target_file: PathBuf,
    /// Words people are allowed to guess
    pub guess_file: PathBuf,
    /// Shared games, one grid row per line; `None` reads stdin
    pub shares_file: Option<PathBuf>,
    /// Lookup table location: loaded when present, saved after building
    pub table_path: Option<PathBuf>,
}

/// Result of a deduction run
pub struct DeduceResult {
    /// Targets still possible, sorted
    pub remaining: Vec<Word>,
    pub starting_candidates: usize,
    pub observations: usize,
    pub table_patterns: usize,
}

/// Run a deduction per the configuration
///
/// # Errors
///
/// Returns an error if a word file or saved table cannot be read, the
/// shares cannot be read, or the table cannot be saved.
pub fn run_deduce(config: &DeduceConfig) -> Result<DeduceResult> {
    let targets = load_from_file(&config.target_file)
        .with_context(|| format!("Failed to read target file {}", config.target_file.display()))?;
    if targets.is_empty() {
        bail!("No valid words in {}", config.target_file.display());
    }
    let guesses = load_from_file(&config.guess_file)
        .with_context(|| format!("Failed to read guess file {}", config.guess_file.display()))?;

    let table = if let Some(path) = config.table_path.as_ref().filter(|p| p.exists()) {
        ShareTable::load(path)
            .with_context(|| format!("Failed to load lookup table {}", path.display()))?
    } else {
        let table = ShareTable::build(&targets, &guesses);
        if let Some(path) = &config.table_path {
            table
                .save(path)
                .with_context(|| format!("Failed to save lookup table {}", path.display()))?;
        }
        table
    };

    let raw = match &config.shares_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read shares {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read shares from stdin")?;
            buffer
        }
    };
    let observations: Vec<String> = raw
        .lines()
        .map(canonicalize_blocks)
        .filter(|line| !line.is_empty())
        .collect();

    let mut remaining: Vec<Word> = table.deduce(&targets, &observations).into_iter().collect();
    remaining.sort();

    Ok(DeduceResult {
        remaining,
        starting_candidates: targets.len(),
        observations: observations.len(),
        table_patterns: table.len(),
    })
}
