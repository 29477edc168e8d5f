//! Move outcomes
//!
//! A structured result for every submitted word, so front ends can react to
//! accepted moves, wins and each kind of rejection without callbacks.

use std::fmt;

/// Result of submitting a candidate word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The word was appended to the history
    Accepted {
        /// The normalized word
        word: String,
        /// Whether the word is the target
        won: bool,
    },
    /// The word was refused and the history is unchanged
    Rejected(Rejection),
}

impl MoveOutcome {
    /// Whether the move was accepted
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Whether the move was accepted and reached the target
    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self, Self::Accepted { won: true, .. })
    }

    /// The rejection reason, if any
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(reason) => Some(reason),
            Self::Accepted { .. } => None,
        }
    }
}

/// Why a candidate word was refused
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No game is in progress
    Uninitialized,
    /// The candidate is not as long as the current word
    InvalidLength { expected: usize, actual: usize },
    /// The candidate does not change exactly one letter
    InvalidDifference { distance: usize },
    /// The candidate is not a dictionary word
    NotInDictionary,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "No game in progress"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be {expected} letters, got {actual}")
            }
            Self::InvalidDifference { distance: 0 } => {
                write!(f, "Word must change one letter, got the same word")
            }
            Self::InvalidDifference { distance } => {
                write!(f, "Word must change exactly one letter, changed {distance}")
            }
            Self::NotInDictionary => write!(f, "Word is not in the dictionary"),
        }
    }
}
