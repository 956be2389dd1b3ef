//! Layered memoization of game-state evaluations
//!
//! Subtree scores are keyed by the exact residual candidate set, so the same
//! state reached along different guess orders costs one evaluation. The cache
//! is one writable local layer plus any number of read-only layers loaded
//! from prior runs' snapshots; lookups go local-first, then through the
//! loaded layers in order, and the first hit wins.
//!
//! Writes are threshold-filtered: an evaluation whose score carries a
//! depth-bound penalty is never cached, because the same state reached under
//! a looser bound must not inherit the penalized score. Ideally the whole
//! cache is built from unbounded searches.
//!
//! The cache is never shared between parallel workers; each worker owns its
//! own copy.

use super::evaluation::Evaluation;
use crate::core::CandidateSet;
use colored::Colorize;
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Scores above this carry a depth-bound penalty and are not cached
pub const SCORE_CUTOFF: f64 = 1000.0;

type Layer = FxHashMap<CandidateSet, Evaluation>;

/// Layered lookup from candidate set to evaluation
#[derive(Debug, Clone, Default)]
pub struct ScoreCache {
    local: Layer,
    layers: Vec<Layer>,
}

impl ScoreCache {
    /// Create an empty cache with no loaded layers
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an evaluation, local layer first, then loaded layers in order
    #[must_use]
    pub fn get(&self, candidates: &CandidateSet) -> Option<&Evaluation> {
        self.local
            .get(candidates)
            .or_else(|| self.layers.iter().find_map(|layer| layer.get(candidates)))
    }

    /// Record an evaluation in the local layer
    ///
    /// Evaluations scoring above [`SCORE_CUTOFF`] are dropped: they were
    /// penalized by a depth bound, and a later search under a looser bound
    /// could reach the same state and deserve a real score.
    pub fn insert(&mut self, candidates: CandidateSet, evaluation: Evaluation) {
        if evaluation.score > SCORE_CUTOFF {
            return;
        }
        self.local.insert(candidates, evaluation);
    }

    /// Number of entries written this run
    #[must_use]
    pub fn local_len(&self) -> usize {
        self.local.len()
    }

    /// Number of read-only layers loaded from snapshots
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Load snapshot files as read-only layers, in the order given
    ///
    /// A snapshot that cannot be read or parsed is skipped with a warning;
    /// the search proceeds as if that layer were empty.
    pub fn load(&mut self, paths: &[PathBuf]) {
        for path in paths {
            match read_snapshot(path) {
                Ok(layer) => self.layers.push(layer),
                Err(err) => {
                    eprintln!(
                        "{} cache file {} not usable ({err}); continuing without it",
                        "warning:".yellow().bold(),
                        path.display()
                    );
                }
            }
        }
    }

    /// Persist only the entries written this run
    ///
    /// # Errors
    /// Returns an I/O error if the snapshot cannot be serialized or written.
    pub fn save_updates<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let entries: Vec<(&CandidateSet, &Evaluation)> = self.local.iter().collect();
        write_snapshot(path.as_ref(), &entries)
    }

    /// Persist the merged view of every layer
    ///
    /// Where layers disagree the lookup precedence applies: local entries
    /// win, then earlier-loaded layers over later ones.
    ///
    /// # Errors
    /// Returns an I/O error if the snapshot cannot be serialized or written.
    pub fn save_all<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut merged: FxHashMap<&CandidateSet, &Evaluation> = FxHashMap::default();
        for layer in self.layers.iter().rev() {
            for (candidates, evaluation) in layer {
                merged.insert(candidates, evaluation);
            }
        }
        for (candidates, evaluation) in &self.local {
            merged.insert(candidates, evaluation);
        }

        let entries: Vec<(&CandidateSet, &Evaluation)> = merged.into_iter().collect();
        write_snapshot(path.as_ref(), &entries)
    }
}

fn read_snapshot(path: &Path) -> io::Result<Layer> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<(CandidateSet, Evaluation)> =
        serde_json::from_str(&content).map_err(io::Error::other)?;
    Ok(entries.into_iter().collect())
}

fn write_snapshot(path: &Path, entries: &[(&CandidateSet, &Evaluation)]) -> io::Result<()> {
    let content = serde_json::to_string(entries).map_err(io::Error::other)?;
    fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::env;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn eval(score: f64) -> Evaluation {
        Evaluation {
            score,
            best_guess: Some(Word::new("crane").unwrap()),
            ..Evaluation::won()
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("wordle_optimal_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn insert_then_get() {
        let mut cache = ScoreCache::new();
        let key = set(&["crane", "slate"]);

        assert!(cache.get(&key).is_none());
        cache.insert(key.clone(), eval(1.5));

        assert_eq!(cache.get(&key).unwrap().score, 1.5);
        assert_eq!(cache.local_len(), 1);
    }

    #[test]
    fn penalized_scores_are_not_cached() {
        let mut cache = ScoreCache::new();
        let key = set(&["crane"]);

        cache.insert(key.clone(), eval(SCORE_CUTOFF + 1.0));

        assert!(cache.get(&key).is_none());
        assert_eq!(cache.local_len(), 0);
    }

    #[test]
    fn scores_at_the_cutoff_are_cached() {
        let mut cache = ScoreCache::new();
        let key = set(&["crane"]);

        cache.insert(key.clone(), eval(SCORE_CUTOFF));
        assert!(cache.get(&key).is_some());
    }

    #[test]
    fn local_layer_wins_over_loaded_layers() {
        let key = set(&["crane", "slate"]);

        let mut loaded = ScoreCache::new();
        loaded.insert(key.clone(), eval(9.0));
        let path = temp_path("precedence");
        loaded.save_updates(&path).unwrap();

        let mut cache = ScoreCache::new();
        cache.load(std::slice::from_ref(&path));
        assert_eq!(cache.get(&key).unwrap().score, 9.0);

        cache.insert(key.clone(), eval(2.0));
        assert_eq!(cache.get(&key).unwrap().score, 2.0);

        fs::remove_file(path).ok();
    }

    #[test]
    fn earlier_loaded_layers_win_over_later() {
        let key = set(&["crane"]);

        let first = temp_path("layer_first");
        let second = temp_path("layer_second");
        {
            let mut cache = ScoreCache::new();
            cache.insert(key.clone(), eval(1.0));
            cache.save_updates(&first).unwrap();
        }
        {
            let mut cache = ScoreCache::new();
            cache.insert(key.clone(), eval(2.0));
            cache.save_updates(&second).unwrap();
        }

        let mut cache = ScoreCache::new();
        cache.load(&[first.clone(), second.clone()]);

        assert_eq!(cache.layer_count(), 2);
        assert_eq!(cache.get(&key).unwrap().score, 1.0);

        fs::remove_file(first).ok();
        fs::remove_file(second).ok();
    }

    #[test]
    fn snapshot_round_trip_reproduces_hits() {
        let key_a = set(&["crane", "slate"]);
        let key_b = set(&["irate"]);

        let mut cache = ScoreCache::new();
        cache.insert(key_a.clone(), eval(1.5));
        cache.insert(key_b.clone(), eval(1.0));

        let path = temp_path("round_trip");
        cache.save_updates(&path).unwrap();

        let mut restored = ScoreCache::new();
        restored.load(std::slice::from_ref(&path));

        assert_eq!(restored.get(&key_a), cache.get(&key_a));
        assert_eq!(restored.get(&key_b), cache.get(&key_b));

        fs::remove_file(path).ok();
    }

    #[test]
    fn save_all_merges_with_precedence() {
        let shared = set(&["crane"]);
        let only_loaded = set(&["slate"]);

        let layer_path = temp_path("save_all_layer");
        {
            let mut cache = ScoreCache::new();
            cache.insert(shared.clone(), eval(9.0));
            cache.insert(only_loaded.clone(), eval(3.0));
            cache.save_updates(&layer_path).unwrap();
        }

        let mut cache = ScoreCache::new();
        cache.load(std::slice::from_ref(&layer_path));
        cache.insert(shared.clone(), eval(2.0));

        let merged_path = temp_path("save_all_merged");
        cache.save_all(&merged_path).unwrap();

        let mut restored = ScoreCache::new();
        restored.load(std::slice::from_ref(&merged_path));

        // Local value won for the shared key; the loaded-only key survived
        assert_eq!(restored.get(&shared).unwrap().score, 2.0);
        assert_eq!(restored.get(&only_loaded).unwrap().score, 3.0);

        fs::remove_file(layer_path).ok();
        fs::remove_file(merged_path).ok();
    }

    #[test]
    fn missing_snapshot_is_skipped() {
        let mut cache = ScoreCache::new();
        cache.load(&[PathBuf::from("/nonexistent/score_cache.json")]);

        assert_eq!(cache.layer_count(), 0);
        assert!(cache.get(&set(&["crane"])).is_none());
    }
}
