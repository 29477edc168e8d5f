//! Main word ladder game engine

use super::error::{GameError, InitFailure};
use super::outcome::{MoveOutcome, Rejection};
use super::session::Session;
use super::settings::{GameSettings, PuzzleConfig};
use crate::core::{Dictionary, DictionaryError, hamming_distance, normalize, word_len};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::path::Path;
use std::sync::Arc;

/// Word ladder game engine
///
/// Validates moves against a shared, immutable dictionary and tracks one
/// session at a time. The random source is a type parameter so tests can
/// pass a seeded generator.
pub struct GameEngine<R = StdRng> {
    dictionary: Arc<Dictionary>,
    session: Option<Session>,
    settings: GameSettings,
    puzzle: PuzzleConfig,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Create an engine with an OS-seeded random source
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Dictionary;
    /// use word_ladder::engine::GameEngine;
    ///
    /// let dict = Dictionary::from_slice(&["able", "ably", "ape", "apt"]).unwrap();
    /// let mut game = GameEngine::new(dict);
    ///
    /// game.initialize_game("able", "ably").unwrap();
    /// assert!(game.try_word("ABLY"));
    /// assert!(game.has_won());
    /// ```
    pub fn new(dictionary: impl Into<Arc<Dictionary>>) -> Self {
        Self::with_rng(dictionary, StdRng::from_os_rng())
    }

    /// Create an engine whose random words are reproducible from `seed`
    pub fn seeded(dictionary: impl Into<Arc<Dictionary>>, seed: u64) -> Self {
        Self::with_rng(dictionary, StdRng::seed_from_u64(seed))
    }

    /// Load a dictionary file and create an engine around it
    ///
    /// # Errors
    /// Returns `DictionaryError` if the file cannot be read or holds no words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        Ok(Self::new(Dictionary::from_file(path)?))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine with the given random source
    pub fn with_rng(dictionary: impl Into<Arc<Dictionary>>, rng: R) -> Self {
        Self {
            dictionary: dictionary.into(),
            session: None,
            settings: GameSettings::default(),
            puzzle: PuzzleConfig::default(),
            rng,
        }
    }

    /// Start a new session from `start` to `target`
    ///
    /// Both words are lowercased. Any previous session is discarded, even if
    /// the words are the same.
    ///
    /// # Errors
    /// Returns `GameError::InvalidInitialization` if either word is empty,
    /// their lengths differ, or either is not in the dictionary. The current
    /// session is kept in that case.
    pub fn initialize_game(&mut self, start: &str, target: &str) -> Result<(), GameError> {
        let start = normalize(start);
        let target = normalize(target);

        if start.is_empty() || target.is_empty() {
            return Err(InitFailure::EmptyWord.into());
        }
        if word_len(&start) != word_len(&target) {
            return Err(InitFailure::LengthMismatch { start, target }.into());
        }
        if !self.dictionary.contains(&start) {
            return Err(InitFailure::StartNotInDictionary(start).into());
        }
        if !self.dictionary.contains(&target) {
            return Err(InitFailure::TargetNotInDictionary(target).into());
        }

        tracing::debug!(%start, %target, "Game initialized");
        self.session = Some(Session::new(start, target));
        Ok(())
    }

    /// Submit a candidate word and report what happened
    ///
    /// Checks run in order: length against the current word, exactly one
    /// changed letter, dictionary membership. The first failure is returned
    /// and the history is left untouched.
    pub fn submit(&mut self, candidate: &str) -> MoveOutcome {
        let Some(session) = self.session.as_mut() else {
            return MoveOutcome::Rejected(Rejection::Uninitialized);
        };

        let word = normalize(candidate);
        let current = session.current_word();

        let expected = word_len(current);
        let actual = word_len(&word);
        if actual != expected {
            tracing::trace!(%word, expected, actual, "Rejected: wrong length");
            return MoveOutcome::Rejected(Rejection::InvalidLength { expected, actual });
        }

        let distance = hamming_distance(current, &word);
        if distance != 1 {
            tracing::trace!(%word, distance, "Rejected: wrong letter difference");
            return MoveOutcome::Rejected(Rejection::InvalidDifference { distance });
        }

        if !self.dictionary.contains(&word) {
            tracing::trace!(%word, "Rejected: not in dictionary");
            return MoveOutcome::Rejected(Rejection::NotInDictionary);
        }

        session.push(word.clone());
        let won = session.has_won();
        tracing::debug!(%word, step = session.step_count(), "Word accepted");
        if won {
            tracing::info!(steps = session.step_count(), path = %session.path(), "Game won");
        }

        MoveOutcome::Accepted { word, won }
    }

    /// Submit a candidate word, returning only whether it was accepted
    pub fn try_word(&mut self, candidate: &str) -> bool {
        self.submit(candidate).is_accepted()
    }

    /// Whether the current word is the target
    ///
    /// Always false before the first game is initialized.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.session.as_ref().is_some_and(Session::has_won)
    }

    /// Draw a word of exactly `length` letters, uniformly at random
    ///
    /// # Errors
    /// Returns `GameError::ZeroLength` for a zero length, or
    /// `GameError::NoWordOfLength` if the dictionary has no such word.
    pub fn get_random_word(&mut self, length: usize) -> Result<String, GameError> {
        if length == 0 {
            return Err(GameError::ZeroLength);
        }

        self.dictionary
            .words_of_length(length)
            .choose(&mut self.rng)
            .cloned()
            .ok_or(GameError::NoWordOfLength(length))
    }

    /// Draw a random start word and a different random target word
    ///
    /// The two words only coincide when the dictionary has a single word of
    /// that length.
    ///
    /// # Errors
    /// Same as [`get_random_word`](Self::get_random_word).
    pub fn random_pair(&mut self, length: usize) -> Result<(String, String), GameError> {
        let start = self.get_random_word(length)?;

        let others: Vec<&String> = self
            .dictionary
            .words_of_length(length)
            .iter()
            .filter(|word| **word != start)
            .collect();
        let target = others
            .choose(&mut self.rng)
            .map_or_else(|| start.clone(), |word| (*word).clone());

        Ok((start, target))
    }

    /// Start a fresh game from the puzzle configuration
    ///
    /// Uses random words when `use_random_words` is set, otherwise the
    /// configured start and target.
    ///
    /// # Errors
    /// Propagates random selection and initialization errors.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        let (start, target) = if self.settings.use_random_words {
            self.random_pair(self.puzzle.word_length)?
        } else {
            (self.puzzle.start.clone(), self.puzzle.target.clone())
        };
        self.initialize_game(&start, &target)
    }

    /// Restart the current game from its start word
    ///
    /// # Errors
    /// Returns `GameError::Uninitialized` if no game is in progress.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let session = self.session.as_ref().ok_or(GameError::Uninitialized)?;
        let start = session.start_word().to_owned();
        let target = session.target_word().to_owned();
        self.initialize_game(&start, &target)
    }

    /// # Errors
    /// Returns `GameError::Uninitialized` before the first game.
    pub fn start_word(&self) -> Result<&str, GameError> {
        self.session
            .as_ref()
            .map(Session::start_word)
            .ok_or(GameError::Uninitialized)
    }

    /// # Errors
    /// Returns `GameError::Uninitialized` before the first game.
    pub fn target_word(&self) -> Result<&str, GameError> {
        self.session
            .as_ref()
            .map(Session::target_word)
            .ok_or(GameError::Uninitialized)
    }

    /// Copy of the history, start word first
    ///
    /// Empty before the first game.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.session
            .as_ref()
            .map(|session| session.history().to_vec())
            .unwrap_or_default()
    }

    /// The last word in the history
    #[must_use]
    pub fn current_word(&self) -> Option<&str> {
        self.session.as_ref().map(Session::current_word)
    }

    /// Number of accepted moves in the current game
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.session.as_ref().map_or(0, Session::step_count)
    }

    /// History rendered as a path, empty before the first game
    #[must_use]
    pub fn path(&self) -> String {
        self.session.as_ref().map(Session::path).unwrap_or_default()
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Handle to the dictionary for building another engine
    #[must_use]
    pub fn shared_dictionary(&self) -> Arc<Dictionary> {
        Arc::clone(&self.dictionary)
    }

    #[must_use]
    pub const fn settings(&self) -> GameSettings {
        self.settings
    }

    pub const fn set_settings(&mut self, settings: GameSettings) {
        self.settings = settings;
    }

    #[must_use]
    pub const fn show_error_message(&self) -> bool {
        self.settings.show_error_message
    }

    pub const fn set_show_error_message(&mut self, value: bool) {
        self.settings.show_error_message = value;
    }

    #[must_use]
    pub const fn show_path(&self) -> bool {
        self.settings.show_path
    }

    pub const fn set_show_path(&mut self, value: bool) {
        self.settings.show_path = value;
    }

    #[must_use]
    pub const fn use_random_words(&self) -> bool {
        self.settings.use_random_words
    }

    pub const fn set_use_random_words(&mut self, value: bool) {
        self.settings.use_random_words = value;
    }

    #[must_use]
    pub const fn puzzle(&self) -> &PuzzleConfig {
        &self.puzzle
    }

    pub fn set_puzzle(&mut self, puzzle: PuzzleConfig) {
        self.puzzle = puzzle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &[&str] = &["able", "ably", "ape", "apt"];

    const LADDER: &[&str] = &[
        "soul", "soil", "sail", "mail", "mall", "male", "mate", "foul", "fool", "pool", "poll",
        "pole", "mole", "mile", "mild", "ape", "apt", "act", "crane", "crate", "grate",
    ];

    fn engine(words: &[&str]) -> GameEngine {
        GameEngine::seeded(Dictionary::from_slice(words).unwrap(), 7)
    }

    fn started(words: &[&str], start: &str, target: &str) -> GameEngine {
        let mut game = engine(words);
        game.initialize_game(start, target).unwrap();
        game
    }

    fn assert_ladder_invariants(game: &GameEngine) {
        let history = game.history();
        assert!(!history.is_empty());
        let length = word_len(game.start_word().unwrap());
        for word in &history {
            assert_eq!(word_len(word), length);
            assert!(game.dictionary().contains(word));
        }
        for pair in history.windows(2) {
            assert_eq!(hamming_distance(&pair[0], &pair[1]), 1);
        }
        assert_eq!(
            game.has_won(),
            game.current_word() == Some(game.target_word().unwrap())
        );
    }

    #[test]
    fn initialize_sets_words_and_history() {
        let game = started(SMALL, "able", "ably");
        assert_eq!(game.start_word().unwrap(), "able");
        assert_eq!(game.target_word().unwrap(), "ably");
        assert_eq!(game.history(), ["able"]);
        assert_eq!(game.current_word(), Some("able"));
        assert!(!game.has_won());
    }

    #[test]
    fn initialize_normalizes_case() {
        let game = started(SMALL, "ABLE", "AbLy");
        assert_eq!(game.start_word().unwrap(), "able");
        assert_eq!(game.target_word().unwrap(), "ably");
        assert_eq!(game.history(), ["able"]);
    }

    #[test]
    fn initialize_rejects_empty_words() {
        let mut game = engine(SMALL);
        assert_eq!(
            game.initialize_game("", "ably"),
            Err(GameError::InvalidInitialization(InitFailure::EmptyWord))
        );
        assert_eq!(
            game.initialize_game("able", ""),
            Err(GameError::InvalidInitialization(InitFailure::EmptyWord))
        );
    }

    #[test]
    fn initialize_rejects_length_mismatch() {
        let mut game = engine(SMALL);
        assert!(matches!(
            game.initialize_game("able", "ables"),
            Err(GameError::InvalidInitialization(
                InitFailure::LengthMismatch { .. }
            ))
        ));
    }

    #[test]
    fn initialize_rejects_words_outside_dictionary() {
        let mut game = engine(SMALL);
        assert_eq!(
            game.initialize_game("abxx", "ably"),
            Err(GameError::InvalidInitialization(
                InitFailure::StartNotInDictionary("abxx".to_string())
            ))
        );
        assert_eq!(
            game.initialize_game("able", "ABXX"),
            Err(GameError::InvalidInitialization(
                InitFailure::TargetNotInDictionary("abxx".to_string())
            ))
        );
    }

    #[test]
    fn failed_initialize_keeps_current_session() {
        let mut game = started(SMALL, "able", "ably");
        assert!(game.try_word("ably"));

        assert!(game.initialize_game("able", "zzzz").is_err());
        assert_eq!(game.history(), ["able", "ably"]);
        assert_eq!(game.target_word().unwrap(), "ably");
    }

    #[test]
    fn reinitialize_resets_history() {
        let mut game = started(LADDER, "soul", "mate");
        assert!(game.try_word("soil"));
        assert!(game.try_word("sail"));

        game.initialize_game("foul", "mole").unwrap();
        assert_eq!(game.history(), ["foul"]);

        game.initialize_game("foul", "mole").unwrap();
        assert_eq!(game.history(), ["foul"]);
        assert_eq!(game.step_count(), 0);
    }

    #[test]
    fn accepted_word_wins() {
        let mut game = started(SMALL, "able", "ably");
        assert!(game.try_word("ably"));
        assert_eq!(game.history(), ["able", "ably"]);
        assert!(game.has_won());
    }

    #[test]
    fn multiple_letter_change_rejected() {
        let mut game = started(SMALL, "able", "ably");
        assert!(!game.try_word("aces"));
        assert_eq!(game.history(), ["able"]);
    }

    #[test]
    fn wrong_length_rejected() {
        let mut game = started(SMALL, "able", "ably");
        assert_eq!(
            game.submit("ables"),
            MoveOutcome::Rejected(Rejection::InvalidLength {
                expected: 4,
                actual: 5
            })
        );
        assert!(!game.try_word(""));
        assert_eq!(game.history(), ["able"]);
    }

    #[test]
    fn unknown_word_rejected() {
        let mut game = started(SMALL, "able", "ably");
        assert_eq!(
            game.submit("abxe"),
            MoveOutcome::Rejected(Rejection::NotInDictionary)
        );
        assert!(!game.try_word("abxx"));
        assert_eq!(game.current_word(), Some("able"));
    }

    #[test]
    fn checks_run_in_order() {
        let mut game = started(SMALL, "able", "ably");
        // Wrong length wins over everything else
        assert!(matches!(
            game.submit("xx"),
            MoveOutcome::Rejected(Rejection::InvalidLength { .. })
        ));
        // "aces" is also unknown, but the difference check comes first
        assert_eq!(
            game.submit("aces"),
            MoveOutcome::Rejected(Rejection::InvalidDifference { distance: 3 })
        );
    }

    #[test]
    fn same_word_rejected() {
        let mut game = started(SMALL, "able", "ably");
        assert!(game.try_word("ably"));
        assert_eq!(
            game.submit("ably"),
            MoveOutcome::Rejected(Rejection::InvalidDifference { distance: 0 })
        );
        assert_eq!(game.history(), ["able", "ably"]);
    }

    #[test]
    fn revisiting_a_word_is_allowed() {
        let mut game = started(SMALL, "able", "ably");
        assert!(game.try_word("ably"));
        assert!(game.try_word("able"));
        assert!(game.try_word("ably"));
        assert_eq!(game.history(), ["able", "ably", "able", "ably"]);
        assert!(game.has_won());
    }

    #[test]
    fn submit_is_case_insensitive() {
        let mut game = started(LADDER, "soul", "mate");
        assert_eq!(
            game.submit("SOIL"),
            MoveOutcome::Accepted {
                word: "soil".to_string(),
                won: false
            }
        );
        assert_eq!(game.current_word(), Some("soil"));
    }

    #[test]
    fn full_ladder_to_target() {
        let mut game = started(LADDER, "soul", "mate");
        for word in ["soil", "sail", "mail", "mall", "male"] {
            let outcome = game.submit(word);
            assert!(outcome.is_accepted());
            assert!(!outcome.is_won());
        }
        assert!(game.submit("mate").is_won());
        assert_eq!(game.step_count(), 6);
        assert_eq!(
            game.path(),
            "soul -> soil -> sail -> mail -> mall -> male -> mate"
        );
        assert_ladder_invariants(&game);
    }

    #[test]
    fn play_continues_after_win() {
        let mut game = started(SMALL, "able", "ably");
        assert!(game.try_word("ably"));
        assert!(game.try_word("able"));
        assert!(!game.has_won());
    }

    #[test]
    fn invariants_hold_over_exhaustive_attempts() {
        let mut game = started(LADDER, "soul", "mole");
        // Try every word, over and over, from wherever the ladder is
        for _ in 0..5 {
            for &word in LADDER {
                let before = game.history();
                let accepted = game.try_word(word);
                if accepted {
                    assert_eq!(game.history().len(), before.len() + 1);
                } else {
                    assert_eq!(game.history(), before);
                }
                assert_ladder_invariants(&game);
            }
        }
    }

    #[test]
    fn history_is_a_snapshot() {
        let mut game = started(SMALL, "able", "ably");
        let mut history = game.history();
        history.push("zzzz".to_string());
        history[0] = "oops".to_string();
        assert_eq!(game.history(), ["able"]);
        assert!(game.try_word("ably"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn queries_before_initialization() {
        let mut game = engine(SMALL);
        assert_eq!(game.start_word(), Err(GameError::Uninitialized));
        assert_eq!(game.target_word(), Err(GameError::Uninitialized));
        assert_eq!(game.current_word(), None);
        assert!(game.history().is_empty());
        assert!(!game.has_won());
        assert_eq!(game.path(), "");
        assert_eq!(game.reset(), Err(GameError::Uninitialized));
        assert_eq!(
            game.submit("able"),
            MoveOutcome::Rejected(Rejection::Uninitialized)
        );
    }

    #[test]
    fn start_equal_to_target_is_won_immediately() {
        let game = started(SMALL, "able", "able");
        assert!(game.has_won());
    }

    #[test]
    fn random_word_has_requested_length() {
        let mut game = engine(LADDER);
        for length in [3, 4, 5] {
            for _ in 0..20 {
                let word = game.get_random_word(length).unwrap();
                assert_eq!(word_len(&word), length);
                assert!(game.dictionary().contains(&word));
            }
        }
    }

    #[test]
    fn random_word_usable_as_start() {
        let mut game = engine(SMALL);
        let word = game.get_random_word(4).unwrap();
        assert!(game.initialize_game(&word, "able").is_ok());
    }

    #[test]
    fn random_word_errors() {
        let mut game = engine(SMALL);
        assert_eq!(game.get_random_word(0), Err(GameError::ZeroLength));
        assert_eq!(game.get_random_word(7), Err(GameError::NoWordOfLength(7)));
    }

    #[test]
    fn random_word_covers_every_candidate() {
        let mut game = engine(LADDER);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(game.get_random_word(3).unwrap());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn seeded_engines_draw_the_same_words() {
        let mut a = engine(LADDER);
        let mut b = engine(LADDER);
        for _ in 0..10 {
            assert_eq!(a.get_random_word(4), b.get_random_word(4));
        }
    }

    #[test]
    fn random_pair_words_differ() {
        let mut game = engine(LADDER);
        for _ in 0..20 {
            let (start, target) = game.random_pair(4).unwrap();
            assert_ne!(start, target);
            assert_eq!(word_len(&start), 4);
            assert_eq!(word_len(&target), 4);
        }
    }

    #[test]
    fn random_pair_with_single_candidate() {
        let mut game = engine(&["able", "ape"]);
        assert_eq!(
            game.random_pair(3).unwrap(),
            ("ape".to_string(), "ape".to_string())
        );
    }

    #[test]
    fn new_game_uses_default_puzzle() {
        let mut game = engine(LADDER);
        game.new_game().unwrap();
        assert_eq!(game.start_word().unwrap(), "soul");
        assert_eq!(game.target_word().unwrap(), "mate");
    }

    #[test]
    fn new_game_with_random_words() {
        let mut game = engine(LADDER);
        game.set_use_random_words(true);
        game.set_puzzle(PuzzleConfig::new("soul", "mate", 5));
        game.new_game().unwrap();

        let start = game.start_word().unwrap().to_owned();
        let target = game.target_word().unwrap().to_owned();
        assert_eq!(word_len(&start), 5);
        assert_eq!(word_len(&target), 5);
        assert_ne!(start, target);
        assert_eq!(game.history(), [start]);
    }

    #[test]
    fn new_game_with_bad_puzzle_fails() {
        let mut game = engine(SMALL);
        assert!(matches!(
            game.new_game(),
            Err(GameError::InvalidInitialization(_))
        ));

        game.set_use_random_words(true);
        game.set_puzzle(PuzzleConfig::new("able", "ably", 6));
        assert_eq!(game.new_game(), Err(GameError::NoWordOfLength(6)));
    }

    #[test]
    fn reset_restarts_same_words() {
        let mut game = started(LADDER, "soul", "mate");
        assert!(game.try_word("soil"));
        game.reset().unwrap();
        assert_eq!(game.history(), ["soul"]);
        assert_eq!(game.target_word().unwrap(), "mate");
    }

    #[test]
    fn flags_are_independent() {
        let mut game = started(SMALL, "able", "ably");
        assert_eq!(game.settings(), GameSettings::default());

        game.set_show_error_message(false);
        assert!(!game.show_error_message());
        assert!(!game.show_path());
        assert!(!game.use_random_words());

        game.set_show_path(true);
        assert!(game.show_path());
        assert!(!game.show_error_message());

        game.set_use_random_words(true);
        assert!(game.use_random_words());
        assert!(game.show_path());

        assert_eq!(game.history(), ["able"]);
        assert!(!game.has_won());
    }

    #[test]
    fn engines_share_a_dictionary() {
        let game = engine(SMALL);
        let mut other = GameEngine::seeded(game.shared_dictionary(), 1);
        other.initialize_game("ape", "apt").unwrap();
        assert!(other.try_word("apt"));
        assert_eq!(game.current_word(), None);
    }

    #[test]
    fn from_file_missing_dictionary() {
        assert!(GameEngine::from_file("/no/such/dictionary.txt").is_err());
    }
}
