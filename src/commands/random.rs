//! Random puzzle command
//!
//! Draws start/target pairs from the dictionary. No attempt is made to check
//! that a ladder exists between them.

use crate::engine::{GameEngine, GameError};
use rand::Rng;

/// A start/target pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub start: String,
    pub target: String,
}

/// Draw `count` random puzzles with words of `length` letters
///
/// # Errors
///
/// Returns `GameError::ZeroLength` or `GameError::NoWordOfLength` if no word
/// of that length can be drawn.
pub fn generate_puzzles<R: Rng>(
    engine: &mut GameEngine<R>,
    length: usize,
    count: usize,
) -> Result<Vec<Puzzle>, GameError> {
    (0..count)
        .map(|_| {
            let (start, target) = engine.random_pair(length)?;
            Ok(Puzzle { start, target })
        })
        .collect()
}
