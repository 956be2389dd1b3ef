//! The host side of the game
//!
//! The host reveals feedback. Evaluating a guess means partitioning the
//! candidate set by the response each candidate would produce as the hidden
//! target, scoring each partition, and aggregating. The trait keeps the
//! partition-scoring capability abstract so the player never depends on a
//! concrete host policy.

use super::evaluation::Evaluation;
use crate::core::{CandidateSet, Response, Word};
use rustc_hash::FxHashMap;

/// A host policy: score one guess against a candidate set
///
/// `score_partition` is supplied by the caller and scores the game state
/// reached when the host's feedback narrows the candidates to one partition.
pub trait Host {
    fn evaluate<F>(&self, candidates: &CandidateSet, guess: &Word, score_partition: F) -> Evaluation
    where
        F: FnMut(CandidateSet, Response) -> Evaluation;
}

/// A host choosing targets uniformly at random from the remaining candidates
///
/// This mimics the real game: the hidden word was fixed before play, so from
/// the player's view every remaining candidate is equally likely. The
/// aggregate score is the partition-size-weighted mean of partition scores.
/// Stateless; all memoization lives with the player.
pub struct UniformHost;

impl Host for UniformHost {
    fn evaluate<F>(&self, candidates: &CandidateSet, guess: &Word, mut score_partition: F) -> Evaluation
    where
        F: FnMut(CandidateSet, Response) -> Evaluation,
    {
        // Group candidates by the response each would give, then follow each
        // response just once and weight by group size.
        let mut by_response: FxHashMap<Response, Vec<Word>> = FxHashMap::default();
        for word in candidates {
            let response = Response::compute(word, guess);
            by_response.entry(response).or_default().push(word.clone());
        }

        let total = candidates.len() as f64;
        let mut aggregate = Evaluation::default();

        for (response, words) in by_response {
            let weight = words.len() as f64;
            let partition: CandidateSet = words.into_iter().collect();
            let child = score_partition(partition, response);

            aggregate.score += weight * child.score / total;
            aggregate.histogram.merge(&child.histogram);
            aggregate.failures = aggregate.failures.union(&child.failures);
        }

        aggregate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn partitions_cover_candidates_exactly_once() {
        let candidates = set(&["irate", "crate", "grate", "slate"]);
        let guess = Word::new("crane").unwrap();

        let mut seen = 0usize;
        UniformHost.evaluate(&candidates, &guess, |partition, response| {
            seen += partition.len();
            // Every member of the partition reproduces the partition key
            for word in partition.iter() {
                assert_eq!(Response::compute(word, &guess), response);
            }
            Evaluation::won()
        });

        assert_eq!(seen, candidates.len());
    }

    #[test]
    fn score_is_size_weighted_mean() {
        // Guessing a candidate splits {honey, money}: the matching word wins
        // outright (score 0), the other needs one more turn (score 1), so
        // the expectation is 0.5.
        let candidates = set(&["honey", "money"]);
        let guess = Word::new("honey").unwrap();

        let aggregate = UniformHost.evaluate(&candidates, &guess, |partition, response| {
            if response.is_all_correct() {
                Evaluation::won()
            } else {
                let mut child = Evaluation::won();
                child.score = 1.0;
                child.histogram.shift_right();
                assert_eq!(partition.len(), 1);
                child
            }
        });

        assert!((aggregate.score - 0.5).abs() < f64::EPSILON);
        // One win at bucket 0 (immediate) and one at bucket 1
        assert_eq!(aggregate.histogram.get(0), 1);
        assert_eq!(aggregate.histogram.get(1), 1);
    }

    #[test]
    fn failures_are_unioned_across_partitions() {
        let candidates = set(&["bbbbb", "ccccc", "ddddd"]);
        let guess = Word::new("bbbbb").unwrap();

        let aggregate = UniformHost.evaluate(&candidates, &guess, |partition, response| {
            if response.is_all_correct() {
                Evaluation::won()
            } else {
                Evaluation::lost(&partition)
            }
        });

        assert_eq!(aggregate.failures, set(&["ccccc", "ddddd"]));
    }

    #[test]
    fn indistinguishable_candidates_share_a_partition() {
        // ccccc and ddddd give identical (all absent) feedback to bbbbb
        let candidates = set(&["bbbbb", "ccccc", "ddddd"]);
        let guess = Word::new("bbbbb").unwrap();

        let mut partition_sizes = Vec::new();
        UniformHost.evaluate(&candidates, &guess, |partition, _| {
            partition_sizes.push(partition.len());
            Evaluation::won()
        });
        partition_sizes.sort_unstable();

        assert_eq!(partition_sizes, vec![1, 2]);
    }
}
