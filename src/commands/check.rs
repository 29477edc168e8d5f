//! Ladder checking command
//!
//! Replays a complete ladder through the engine and reports where it breaks.

use crate::core::normalize;
use crate::engine::{GameEngine, GameError, InitFailure, MoveOutcome, Rejection};
use rand::Rng;

/// One replayed step
pub struct CheckStep {
    pub word: String,
    pub outcome: MoveOutcome,
}

/// Result of checking a ladder
pub struct CheckResult {
    pub start: String,
    pub target: String,
    pub steps: Vec<CheckStep>,
    pub solved: bool,
}

impl CheckResult {
    /// The first refused step, with its position in the ladder
    #[must_use]
    pub fn first_rejection(&self) -> Option<(usize, &str, Rejection)> {
        self.steps.iter().enumerate().find_map(|(i, step)| {
            step.outcome
                .rejection()
                .map(|reason| (i + 1, step.word.as_str(), *reason))
        })
    }
}

/// Check that `words` is a valid ladder from its first word to its last
///
/// Replay stops at the first refused word.
///
/// # Errors
///
/// Returns `GameError::InvalidInitialization` if no words are given or the
/// first and last words cannot start a game.
pub fn check_ladder<R: Rng>(
    engine: &mut GameEngine<R>,
    words: &[String],
) -> Result<CheckResult, GameError> {
    let [start, rest @ ..] = words else {
        return Err(InitFailure::EmptyWord.into());
    };
    let target = rest.last().unwrap_or(start);

    engine.initialize_game(start, target)?;

    let mut steps = Vec::with_capacity(rest.len());
    for word in rest {
        let outcome = engine.submit(word);
        let rejected = !outcome.is_accepted();
        steps.push(CheckStep {
            word: normalize(word),
            outcome,
        });
        if rejected {
            break;
        }
    }

    Ok(CheckResult {
        start: engine.start_word()?.to_owned(),
        target: engine.target_word()?.to_owned(),
        steps,
        solved: engine.has_won(),
    })
}
