//! Candidate sets: the unit of game state
//!
//! A CandidateSet is the set of words still possibly equal to the target.
//! Two sets constructed in any order compare and hash equal, which is what
//! lets the score cache key on the exact residual state. The evaluation of a
//! state depends only on which words remain, never on how many turns were
//! spent reaching it; a scoring metric that cared about turns remaining would
//! need the turn count in this key and is unsupported.

use super::word::Word;
use super::{Response, Tag};
use serde::{Deserialize, Deserializer, Serialize};

/// An immutable, order-irrelevant set of candidate words
///
/// Internally a sorted, deduplicated vector, so equality and hashing see the
/// same representation regardless of construction order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    /// Number of candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether no candidates remain
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate candidates in sorted order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Candidates as a sorted slice
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Membership test
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// Set union, used when merging failure sets across partitions
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.words
            .iter()
            .chain(other.words.iter())
            .cloned()
            .collect()
    }

    /// Narrow to the words consistent with a guess/response pair
    ///
    /// Keeps exactly the words `w` for which `Response::compute(w, guess)`
    /// equals `response`. Three cheap necessary checks prune first: letters
    /// that must appear, letters that must not appear, and exact position
    /// matches. They are not sufficient when a letter carries mixed tags
    /// (one occurrence correct, another absent), so every survivor is
    /// re-verified by the full feedback computation.
    ///
    /// # Examples
    /// ```
    /// use wordle_optimal::core::{CandidateSet, Response, Word};
    ///
    /// let pool: CandidateSet = ["slate", "irate", "crate"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    ///
    /// let guess = Word::new("irate").unwrap();
    /// let narrowed = pool.narrow(&guess, Response::ALL_CORRECT);
    ///
    /// assert_eq!(narrowed.len(), 1);
    /// assert!(narrowed.contains(&guess));
    /// ```
    #[must_use]
    pub fn narrow(&self, guess: &Word, response: Response) -> Self {
        let tags = response.tags();

        let mut must = Vec::new(); // letters tagged present or correct somewhere
        let mut must_not = Vec::new(); // letters tagged absent everywhere
        let mut exact = Vec::new(); // (position, letter) exact matches

        for (i, tag) in tags.iter().enumerate() {
            let letter = guess.char_at(i);
            match tag {
                Tag::Absent => must_not.push(letter),
                Tag::Present => must.push(letter),
                Tag::Correct => {
                    must.push(letter);
                    exact.push((i, letter));
                }
            }
        }
        must_not.retain(|letter| !must.contains(letter));

        self.words
            .iter()
            .filter(|w| {
                must.iter().all(|&letter| w.contains(letter))
                    && must_not.iter().all(|&letter| !w.contains(letter))
                    && exact.iter().all(|&(i, letter)| w.char_at(i) == letter)
            })
            .filter(|w| Response::compute(w, guess) == response)
            .cloned()
            .collect()
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut words: Vec<Word> = iter.into_iter().collect();
        words.sort();
        words.dedup();
        Self { words }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

// Deserialization re-establishes the sorted-dedup invariant rather than
// trusting the snapshot to be canonical.
impl<'de> Deserialize<'de> for CandidateSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let words = Vec::<Word>::deserialize(deserializer)?;
        Ok(words.into_iter().collect())
    }
}
