//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_deduce_result, print_explore_result};
pub use formatters::histogram_chart;
