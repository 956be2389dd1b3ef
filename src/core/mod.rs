//! Core domain types
//!
//! Words, feedback responses, and candidate sets.

mod candidates;
mod response;
mod word;

pub use candidates::CandidateSet;
pub use response::{Response, Tag};
pub use word::{WORD_LEN, Word, WordError};
