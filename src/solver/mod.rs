//! Expectimax game-tree search
//!
//! The game is modeled as two agents: a host that reveals feedback and a
//! player that picks guesses to minimize expected turns-to-win. The player
//! recurses through every reachable game, memoizing subtree scores by
//! residual candidate set.

pub mod cache;
pub mod evaluation;
pub mod host;
mod parallel;
pub mod player;

pub use cache::{SCORE_CUTOFF, ScoreCache};
pub use evaluation::{Evaluation, Histogram, PENALTY_PER_WORD};
pub use host::{Host, UniformHost};
pub use player::{GuessPolicy, Player, SearchError};
