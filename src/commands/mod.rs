//! Command implementations

pub mod check;
pub mod random;
pub mod simple;

pub use check::{CheckResult, CheckStep, check_ladder};
pub use random::{Puzzle, generate_puzzles};
pub use simple::run_simple;
