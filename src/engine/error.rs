//! Engine error types
//!
//! These cover caller mistakes only. Ordinary bad moves are reported through
//! [`MoveOutcome`](super::MoveOutcome), never as errors.

use thiserror::Error;

/// Precondition violation reported by the game engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// `initialize_game` was called with an unusable word pair
    #[error("invalid game initialization: {0}")]
    InvalidInitialization(#[from] InitFailure),
    /// A random word of length zero was requested
    #[error("word length must be greater than 0")]
    ZeroLength,
    /// No dictionary word has the requested length
    #[error("no dictionary word has length {0}")]
    NoWordOfLength(usize),
    /// Session state was queried before the first `initialize_game`
    #[error("no game has been initialized")]
    Uninitialized,
}

/// Why a start/target pair was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitFailure {
    #[error("start and target words cannot be empty")]
    EmptyWord,
    #[error("start word '{start}' and target word '{target}' differ in length")]
    LengthMismatch { start: String, target: String },
    #[error("start word '{0}' is not in the dictionary")]
    StartNotInDictionary(String),
    #[error("target word '{0}' is not in the dictionary")]
    TargetNotInDictionary(String),
}
