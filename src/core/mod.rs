//! Core domain types for word ladders
//!
//! Word comparison helpers and the dictionary. Everything here is pure apart
//! from loading a dictionary file.

mod dictionary;
mod word;

pub use dictionary::{Dictionary, DictionaryError};
pub use word::{hamming_distance, letter_matches, normalize, word_len};
