//! Lookup table from shared color grids to compatible targets
//!
//! A shared game grid shows the color responses for each guess without the
//! letters. Every pattern in it still carries information: the target must
//! be a word for which *some* legal guess produces that exact pattern. The
//! table records, for every block string, the set of targets that could
//! have produced it, and deduction is plain set intersection across the
//! observed patterns. No search or scoring is involved.

use crate::core::{Response, Word};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// The absent square as shared from the dark theme
const DARK_THEME_ABSENT: char = '⬛';
/// The absent square in the canonical (light theme) form
const LIGHT_THEME_ABSENT: char = '⬜';

/// Normalize a shared pattern line to the canonical glyph convention
///
/// Dark-theme and light-theme shares differ only in the absent square;
/// both normalize to the light form, which is what [`ShareTable`] keys on.
///
/// # Examples
/// ```
/// use wordle_optimal::deduce::canonicalize_blocks;
///
/// assert_eq!(canonicalize_blocks(" 🟩⬛🟨⬛⬛ "), "🟩⬜🟨⬜⬜");
/// ```
#[must_use]
pub fn canonicalize_blocks(s: &str) -> String {
    s.trim()
        .replace(DARK_THEME_ABSENT, &LIGHT_THEME_ABSENT.to_string())
}

/// Map from block string to the targets some legal guess matches that way
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareTable {
    data: FxHashMap<String, FxHashSet<Word>>,
}

impl ShareTable {
    /// Build the table by full target × guess enumeration
    ///
    /// The trivial correct guess is skipped, so the all-green pattern never
    /// appears as a key. This takes a while for real word lists; progress is
    /// reported per target.
    #[must_use]
    pub fn build(targets: &[Word], guesses: &[Word]) -> Self {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb.set_message("building lookup table");

        let mut data: FxHashMap<String, FxHashSet<Word>> = FxHashMap::default();
        for target in targets {
            for guess in guesses {
                if guess == target {
                    continue;
                }
                let blocks = Response::compute(target, guess).to_blocks();
                data.entry(blocks).or_default().insert(target.clone());
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        Self { data }
    }

    /// Load a previously saved table
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(io::Error::other)
    }

    /// Save the table for reuse across runs
    ///
    /// # Errors
    /// Returns an I/O error if the table cannot be serialized or written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let content = serde_json::to_string(&self.data).map_err(io::Error::other)?;
        fs::write(path, content)
    }

    /// Targets compatible with one observed pattern
    #[must_use]
    pub fn get(&self, blocks: &str) -> Option<&FxHashSet<Word>> {
        self.data.get(blocks)
    }

    /// Number of distinct patterns recorded
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Narrow the target list by intersecting across observed patterns
    ///
    /// Observations are normalized before lookup. A pattern the table does
    /// not know is ignored; a pattern that would leave nothing is
    /// inconsistent with the other observations, so it is discarded with a
    /// warning rather than emptying the result.
    #[must_use]
    pub fn deduce(&self, targets: &[Word], observations: &[String]) -> FxHashSet<Word> {
        let mut candidates: FxHashSet<Word> = targets.iter().cloned().collect();

        for observation in observations {
            let blocks = canonicalize_blocks(observation);
            let Some(matches) = self.data.get(&blocks) else {
                continue;
            };

            let remaining: FxHashSet<Word> =
                candidates.intersection(matches).cloned().collect();
            if remaining.is_empty() {
                eprintln!(
                    "{} {blocks} leaves us with nothing; throwing out this line",
                    "warning:".yellow().bold()
                );
            } else {
                candidates = remaining;
            }
        }

        candidates
    }
}
