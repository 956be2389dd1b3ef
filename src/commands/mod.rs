//! Command implementations

pub mod deduce;
pub mod explore;

pub use deduce::{DeduceConfig, DeduceResult, run_deduce};
pub use explore::{ExploreConfig, ExploreResult, run_explore};
