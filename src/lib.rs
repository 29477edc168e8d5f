//! Word Ladder
//!
//! A word ladder puzzle game: turn a start word into a target word by changing
//! one letter at a time, with every step a dictionary word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::Dictionary;
//! use word_ladder::engine::GameEngine;
//!
//! let dict = Dictionary::from_slice(&["soul", "soil", "sail"]).unwrap();
//! let mut game = GameEngine::new(dict);
//!
//! game.initialize_game("soul", "sail").unwrap();
//! assert!(game.try_word("soil"));
//! assert!(game.try_word("sail"));
//! assert!(game.has_won());
//! ```

// Core domain types
pub mod core;

// Game state engine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
