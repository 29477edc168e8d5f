//! Word ladder game engine
//!
//! Session state, move validation and random puzzle selection.

mod error;
mod game;
mod outcome;
mod session;
mod settings;

pub use error::{GameError, InitFailure};
pub use game::GameEngine;
pub use outcome::{MoveOutcome, Rejection};
pub use session::Session;
pub use settings::{GameSettings, PuzzleConfig};
