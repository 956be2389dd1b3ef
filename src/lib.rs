//! Wordle Optimal
//!
//! Explores possible Wordle games and finds the optimal guesses: an
//! expectimax search over a host that reveals feedback and a player that
//! minimizes expected turns-to-win, memoized by residual candidate set.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_optimal::core::{CandidateSet, Word};
//! use wordle_optimal::solver::{GuessPolicy, Player, ScoreCache, UniformHost};
//!
//! let pool: CandidateSet = ["honey", "money"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! let mut player = Player::new(GuessPolicy::HardMode, ScoreCache::new());
//! let evaluation = player.start(&pool, &UniformHost, None, None, 1).unwrap();
//!
//! // Either word wins in one or two turns
//! assert!((evaluation.score - 1.5).abs() < 1e-9);
//! ```

// Core domain types
pub mod core;

// Game-tree search
pub mod solver;

// Share-grid deduction
pub mod deduce;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
