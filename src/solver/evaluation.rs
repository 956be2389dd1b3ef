//! Evaluation results and turn-count histograms
//!
//! An Evaluation is everything learned from scoring a game state: the
//! expected turns-to-win, the guess that achieves it, how the wins spread
//! across turn counts, and which words never resolved.

use crate::core::{CandidateSet, Word};
use serde::{Deserialize, Serialize};

/// Penalty per unresolved word when the depth bound cuts a branch off
///
/// Proportional to the branch size so a partition of ten unsolved words is
/// worse than a partition of one when expectations are aggregated upstream.
pub const PENALTY_PER_WORD: f64 = 1_000_000.0;

/// Dense turn-count buckets
///
/// Bucket k counts games resolved in exactly k turns. A win enters at bucket
/// 0 at the leaf and is shifted right once per turn on the way back up, so
/// the root histogram is indexed by total turns taken. Bucket 0 is reserved
/// for unsolved games and stays empty during search; failures are carried in
/// [`Evaluation::failures`] instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Histogram(Vec<u64>);

impl Histogram {
    /// Create an empty histogram
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Count in a bucket; buckets past the end read as zero
    #[inline]
    #[must_use]
    pub fn get(&self, bucket: usize) -> u64 {
        self.0.get(bucket).copied().unwrap_or(0)
    }

    /// Add one observation to a bucket, growing as needed
    pub fn increment(&mut self, bucket: usize) {
        if bucket >= self.0.len() {
            self.0.resize(bucket + 1, 0);
        }
        self.0[bucket] += 1;
    }

    /// Element-wise sum with another histogram
    pub fn merge(&mut self, other: &Self) {
        if other.0.len() > self.0.len() {
            self.0.resize(other.0.len(), 0);
        }
        for (bucket, &count) in other.0.iter().enumerate() {
            self.0[bucket] += count;
        }
    }

    /// Credit one more turn to every recorded game
    pub fn shift_right(&mut self) {
        if !self.0.is_empty() {
            self.0.insert(0, 0);
        }
    }

    /// Total observations across all buckets
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Buckets as a slice, indexed by turn count
    #[must_use]
    pub fn buckets(&self) -> &[u64] {
        &self.0
    }

    /// Check whether nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&count| count == 0)
    }
}

/// Everything learned from evaluating a game state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Expected turns-to-win under a uniform prior (plus penalties)
    pub score: f64,
    /// The guess achieving this score, absent at terminal states
    pub best_guess: Option<Word>,
    /// Wins by turn count
    pub histogram: Histogram,
    /// Words that did not resolve within the depth bound
    pub failures: CandidateSet,
}

impl Evaluation {
    /// Terminal state: the previous guess matched exactly
    #[must_use]
    pub fn won() -> Self {
        let mut histogram = Histogram::new();
        histogram.increment(0);
        Self {
            score: 0.0,
            best_guess: None,
            histogram,
            failures: CandidateSet::default(),
        }
    }

    /// Terminal state: the depth bound was reached with candidates unresolved
    ///
    /// The score is proportional to the number of unresolved words so that
    /// the size-weighted aggregation upstream stays meaningful.
    #[must_use]
    pub fn lost(candidates: &CandidateSet) -> Self {
        Self {
            score: PENALTY_PER_WORD * candidates.len() as f64,
            best_guess: None,
            histogram: Histogram::new(),
            failures: candidates.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn histogram_grows_on_demand() {
        let mut hist = Histogram::new();
        hist.increment(3);
        hist.increment(3);
        hist.increment(1);

        assert_eq!(hist.get(0), 0);
        assert_eq!(hist.get(1), 1);
        assert_eq!(hist.get(3), 2);
        assert_eq!(hist.get(10), 0); // Past the end reads zero
        assert_eq!(hist.total(), 3);
    }

    #[test]
    fn histogram_merge_is_element_wise() {
        let mut a = Histogram::new();
        a.increment(1);
        a.increment(2);

        let mut b = Histogram::new();
        b.increment(2);
        b.increment(4);

        a.merge(&b);

        assert_eq!(a.get(1), 1);
        assert_eq!(a.get(2), 2);
        assert_eq!(a.get(4), 1);
        assert_eq!(a.total(), 4);
    }

    #[test]
    fn histogram_shift_credits_a_turn() {
        let mut hist = Histogram::new();
        hist.increment(0);
        hist.increment(1);

        hist.shift_right();

        assert_eq!(hist.get(0), 0);
        assert_eq!(hist.get(1), 1);
        assert_eq!(hist.get(2), 1);
        assert_eq!(hist.total(), 2);
    }

    #[test]
    fn histogram_shift_on_empty_stays_empty() {
        let mut hist = Histogram::new();
        hist.shift_right();
        assert!(hist.is_empty());
        assert_eq!(hist.buckets().len(), 0);
    }

    #[test]
    fn won_records_one_game_at_bucket_zero() {
        let eval = Evaluation::won();
        assert_eq!(eval.score, 0.0);
        assert!(eval.best_guess.is_none());
        assert_eq!(eval.histogram.get(0), 1);
        assert_eq!(eval.histogram.total(), 1);
        assert!(eval.failures.is_empty());
    }

    #[test]
    fn lost_penalty_is_proportional() {
        let one = Evaluation::lost(&set(&["crane"]));
        let three = Evaluation::lost(&set(&["crane", "slate", "irate"]));

        assert_eq!(one.score, PENALTY_PER_WORD);
        assert_eq!(three.score, 3.0 * PENALTY_PER_WORD);
        assert!(one.histogram.is_empty());
        assert_eq!(three.failures.len(), 3);
    }

    #[test]
    fn evaluation_serde_round_trip() {
        let mut eval = Evaluation::won();
        eval.score = 1.5;
        eval.best_guess = Some(Word::new("crane").unwrap());
        eval.histogram.shift_right();
        eval.failures = set(&["slate"]);

        let json = serde_json::to_string(&eval).unwrap();
        let back: Evaluation = serde_json::from_str(&json).unwrap();

        assert_eq!(back, eval);
    }
}
