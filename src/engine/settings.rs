//! Display flags and puzzle configuration

/// Independent front-end flags held by the engine
///
/// None of these affect move validation or win detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    /// Surface rejected moves to the player
    pub show_error_message: bool,
    /// Render the whole history as a path
    pub show_path: bool,
    /// Start new games from random words instead of the default pair
    pub use_random_words: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            show_error_message: true,
            show_path: false,
            use_random_words: false,
        }
    }
}

/// Puzzle used by `GameEngine::new_game`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Default start word
    pub start: String,
    /// Default target word
    pub target: String,
    /// Length of randomly drawn words
    pub word_length: usize,
}

impl PuzzleConfig {
    #[must_use]
    pub fn new(start: impl Into<String>, target: impl Into<String>, word_length: usize) -> Self {
        Self {
            start: start.into(),
            target: target.into(),
            word_length,
        }
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new("soul", "mate", 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags() {
        let settings = GameSettings::default();
        assert!(settings.show_error_message);
        assert!(!settings.show_path);
        assert!(!settings.use_random_words);
    }

    #[test]
    fn default_puzzle_is_soul_to_mate() {
        let puzzle = PuzzleConfig::default();
        assert_eq!(puzzle.start, "soul");
        assert_eq!(puzzle.target, "mate");
        assert_eq!(puzzle.word_length, 4);
    }
}
