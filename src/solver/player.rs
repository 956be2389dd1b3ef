//! The player side: guess selection and recursion
//!
//! The player recurses through every game reachable from a state and keeps
//! the guess whose expected outcome is best. One turn of cost is added per
//! level on the way back up. Subtree evaluations are memoized by residual
//! candidate set in a [`ScoreCache`].

use super::cache::ScoreCache;
use super::evaluation::Evaluation;
use super::host::Host;
use super::parallel;
use crate::core::{CandidateSet, Response, Word};
use std::fmt;

/// Where the player draws its guesses from
///
/// Under `HardMode` every guess must still be consistent with the feedback
/// so far, i.e. guesses come from the live candidate set. `Pool` allows a
/// fixed external vocabulary instead; the pool should include the candidate
/// words, since a pool that can never produce an exact match only
/// terminates under a depth bound. Cache snapshots are only meaningful
/// across runs that use the same policy and pool.
#[derive(Debug, Clone, Default)]
pub enum GuessPolicy {
    #[default]
    HardMode,
    Pool(Vec<Word>),
}

/// Error type for unusable search inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The root candidate set was empty
    EmptyCandidates,
    /// The guess policy supplies no guesses
    EmptyGuessPool,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidates => write!(f, "Cannot evaluate an empty candidate set"),
            Self::EmptyGuessPool => write!(f, "Guess policy supplies no guesses"),
        }
    }
}

impl std::error::Error for SearchError {}

/// The guessing agent
///
/// Owns the score cache and the guess policy. Cloning a player gives an
/// independent searcher with a snapshot of the cache; the parallel fan-out
/// relies on this.
#[derive(Debug, Clone, Default)]
pub struct Player {
    cache: ScoreCache,
    policy: GuessPolicy,
}

impl Player {
    /// Create a player with the given guess policy and (possibly pre-loaded)
    /// cache
    #[must_use]
    pub const fn new(policy: GuessPolicy, cache: ScoreCache) -> Self {
        Self { cache, policy }
    }

    /// The score cache, for persisting entries after a run
    #[must_use]
    pub const fn cache(&self) -> &ScoreCache {
        &self.cache
    }

    /// Evaluate a game from its starting state
    ///
    /// `max_depth` of `None` searches without bound. A `first_guess` forces
    /// the root guess instead of trying every allowed one. `workers` > 1
    /// fans the root guess enumeration out across that many parallel
    /// workers; 1 runs fully sequentially with identical results.
    ///
    /// # Errors
    /// Returns `SearchError` if the candidate set is empty or the guess
    /// policy supplies no guesses.
    pub fn start<H: Host + Sync>(
        &mut self,
        candidates: &CandidateSet,
        host: &H,
        max_depth: Option<u32>,
        first_guess: Option<&Word>,
        workers: usize,
    ) -> Result<Evaluation, SearchError> {
        if candidates.is_empty() {
            return Err(SearchError::EmptyCandidates);
        }
        if matches!(&self.policy, GuessPolicy::Pool(pool) if pool.is_empty()) {
            return Err(SearchError::EmptyGuessPool);
        }

        // A forced guess is a single evaluation; nothing to fan out
        if workers > 1 && first_guess.is_none() {
            Ok(self.evaluate_root_parallel(candidates, host, max_depth, workers))
        } else {
            Ok(self.evaluate(candidates, None, host, 0, max_depth, first_guess))
        }
    }

    /// Recurse through all games reachable from this state and return the
    /// evaluation of the path the player would take
    ///
    /// `depth` counts guesses already made; `incoming` is the feedback that
    /// produced this state, absent at the root. A forced guess evaluates
    /// only that word and is never written back to the cache (a single-guess
    /// score is not a full evaluation of the state).
    pub(super) fn evaluate<H: Host>(
        &mut self,
        candidates: &CandidateSet,
        incoming: Option<Response>,
        host: &H,
        depth: u32,
        max_depth: Option<u32>,
        forced: Option<&Word>,
    ) -> Evaluation {
        // Won on the previous guess
        if incoming.is_some_and(Response::is_all_correct) {
            return Evaluation::won();
        }
        // Out of turns: penalize every word left unresolved
        if max_depth.is_some_and(|bound| depth >= bound) {
            return Evaluation::lost(candidates);
        }
        if let Some(hit) = self.cache.get(candidates) {
            return hit.clone();
        }

        let depth = depth + 1;
        let guesses: Vec<Word> = match forced {
            Some(word) => vec![word.clone()],
            None => self.guess_pool(candidates),
        };

        let mut best: Option<(Evaluation, Word)> = None;
        for guess in guesses {
            let scored = host.evaluate(candidates, &guess, |partition, response| {
                if !response.is_all_correct() && partition.len() == candidates.len() {
                    // The guess gained no information; recursing would
                    // revisit this exact state. Cannot happen in hard mode
                    // (guessing a candidate always splits off its own win),
                    // only with an external pool word.
                    return Evaluation::lost(&partition);
                }
                self.evaluate(&partition, Some(response), host, depth, max_depth, None)
            });
            // Strict comparison keeps the first guess encountered on ties
            if best
                .as_ref()
                .is_none_or(|(current, _)| scored.score < current.score)
            {
                best = Some((scored, guess));
            }
        }

        let (mut evaluation, best_guess) =
            best.expect("guess pool is nonempty for a nonempty candidate set");
        evaluation.score += 1.0;
        evaluation.histogram.shift_right();
        evaluation.best_guess = Some(best_guess);

        if forced.is_none() {
            self.cache.insert(candidates.clone(), evaluation.clone());
        }
        evaluation
    }

    /// Root-level evaluation with the guess enumeration fanned out across
    /// workers
    ///
    /// Matches the sequential path exactly: results are collected in
    /// dispatch order, so the strict-minimum reduction breaks ties the same
    /// way for any worker count. Worker cache entries are discarded.
    fn evaluate_root_parallel<H: Host + Sync>(
        &mut self,
        candidates: &CandidateSet,
        host: &H,
        max_depth: Option<u32>,
        workers: usize,
    ) -> Evaluation {
        if max_depth.is_some_and(|bound| bound == 0) {
            return Evaluation::lost(candidates);
        }
        if let Some(hit) = self.cache.get(candidates) {
            return hit.clone();
        }

        let guesses = self.guess_pool(candidates);
        let scored = parallel::score_guesses(self, host, candidates, &guesses, 1, max_depth, workers);

        let mut best: Option<(Evaluation, Word)> = None;
        for (evaluation, guess) in scored {
            if best
                .as_ref()
                .is_none_or(|(current, _)| evaluation.score < current.score)
            {
                best = Some((evaluation, guess));
            }
        }

        let (mut evaluation, best_guess) =
            best.expect("guess pool is nonempty for a nonempty candidate set");
        evaluation.score += 1.0;
        evaluation.histogram.shift_right();
        evaluation.best_guess = Some(best_guess);

        self.cache.insert(candidates.clone(), evaluation.clone());
        evaluation
    }

    fn guess_pool(&self, candidates: &CandidateSet) -> Vec<Word> {
        match &self.policy {
            GuessPolicy::HardMode => candidates.iter().cloned().collect(),
            GuessPolicy::Pool(words) => words.clone(),
        }
    }
}
