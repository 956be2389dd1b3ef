//! Word lists for game exploration
//!
//! Word lists arrive as runtime inputs on the command line, one word per
//! line.

pub mod loader;
