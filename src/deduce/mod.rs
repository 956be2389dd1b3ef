//! Target deduction from shared color grids
//!
//! Narrows a solution set using only the patterns other players shared,
//! via a precomputed pattern → targets table and set intersection.

mod table;

pub use table::{ShareTable, canonicalize_blocks};
