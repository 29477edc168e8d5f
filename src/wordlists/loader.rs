//! Dictionary loading utilities
//!
//! Builds a dictionary from a file or from the embedded word list.

use super::DICTIONARY;
use crate::core::{Dictionary, DictionaryError};
use std::path::Path;

/// Build the default dictionary from the embedded word list
///
/// # Errors
///
/// Returns `DictionaryError::Empty` if the embedded list is empty.
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::embedded_dictionary;
///
/// let dict = embedded_dictionary().unwrap();
/// assert!(dict.contains("soul"));
/// ```
pub fn embedded_dictionary() -> Result<Dictionary, DictionaryError> {
    let dictionary = Dictionary::from_slice(DICTIONARY)?;
    tracing::info!(words = dictionary.len(), "Loaded embedded dictionary");
    Ok(dictionary)
}

/// Load the dictionary from `path`, or the embedded list when `path` is `None`
///
/// # Errors
///
/// Returns a `DictionaryError` if the file cannot be read or yields no words.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_dictionary;
///
/// let dict = load_dictionary(Some("data/dictionary.txt")).unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(path: Option<P>) -> Result<Dictionary, DictionaryError> {
    match path {
        Some(path) => Dictionary::from_file(path),
        None => embedded_dictionary(),
    }
}
