//! One playthrough: start word, target word and the ladder so far

/// State of a single game
///
/// Created whole by `GameEngine::initialize_game` and replaced the same way;
/// the history only ever grows in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    start_word: String,
    target_word: String,
    history: Vec<String>,
}

impl Session {
    /// Start a session from already validated, normalized words
    pub(crate) fn new(start_word: String, target_word: String) -> Self {
        let history = vec![start_word.clone()];
        Self {
            start_word,
            target_word,
            history,
        }
    }

    #[must_use]
    pub fn start_word(&self) -> &str {
        &self.start_word
    }

    #[must_use]
    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    /// Every word played so far, start word first
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The last word in the history
    #[must_use]
    pub fn current_word(&self) -> &str {
        self.history.last().unwrap_or(&self.start_word)
    }

    /// Whether the current word is the target
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.current_word() == self.target_word
    }

    /// Number of accepted moves
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.history.len() - 1
    }

    /// History rendered as `start -> ... -> current`
    #[must_use]
    pub fn path(&self) -> String {
        self.history.join(" -> ")
    }

    pub(crate) fn push(&mut self, word: String) {
        self.history.push(word);
    }
}
