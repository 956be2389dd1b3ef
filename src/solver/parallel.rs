//! Parallel fan-out of the root guess enumeration
//!
//! The root guess list is split into contiguous chunks, one rayon task per
//! chunk, and each task searches its guesses sequentially on an independent
//! clone of the player. No mutable state crosses workers; whatever a worker
//! adds to its cache copy is discarded when it finishes. Results come back
//! in dispatch order, so the caller's strict-minimum reduction sees them
//! exactly as the sequential loop would and tie-breaking is identical for
//! any worker count.

use super::evaluation::Evaluation;
use super::host::Host;
use super::player::Player;
use crate::core::{CandidateSet, Word};
use rayon::prelude::*;

/// Score every guess against the candidate set, `workers` chunks at a time
///
/// `depth` is the turn number these guesses would be played at; the caller
/// applies its own turn cost and minimum-score selection afterwards.
pub(super) fn score_guesses<H: Host + Sync>(
    player: &Player,
    host: &H,
    candidates: &CandidateSet,
    guesses: &[Word],
    depth: u32,
    max_depth: Option<u32>,
    workers: usize,
) -> Vec<(Evaluation, Word)> {
    if guesses.is_empty() {
        return Vec::new();
    }
    let chunk_size = guesses.len().div_ceil(workers.max(1)).max(1);

    let per_chunk: Vec<Vec<(Evaluation, Word)>> = guesses
        .par_chunks(chunk_size)
        .map(|chunk| {
            let mut worker = player.clone();
            chunk
                .iter()
                .map(|guess| {
                    let scored = host.evaluate(candidates, guess, |partition, response| {
                        if !response.is_all_correct() && partition.len() == candidates.len() {
                            // Zero-information guess; same guard as the
                            // sequential path
                            return Evaluation::lost(&partition);
                        }
                        worker.evaluate(&partition, Some(response), host, depth, max_depth, None)
                    });
                    (scored, guess.clone())
                })
                .collect()
        })
        .collect();

    per_chunk.into_iter().flatten().collect()
}
