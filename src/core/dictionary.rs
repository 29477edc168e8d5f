//! Dictionary of valid ladder words
//!
//! An immutable set of lowercase words plus a length index used for
//! random word selection. Built once and shared read-only.

use super::word::{normalize, word_len};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error raised when a dictionary cannot be built
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The source could not be read
    #[error("failed to read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The source yielded no words after trimming blank lines
    #[error("dictionary contains no usable words")]
    Empty,
}

/// Set of valid words, normalized to lowercase
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<String>,
    by_length: FxHashMap<usize, Vec<String>>,
}

impl Dictionary {
    /// Build a dictionary from any sequence of lines
    ///
    /// Each line is trimmed and lowercased; lines that are empty after
    /// trimming are dropped.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no usable words remain.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Dictionary;
    ///
    /// let dict = Dictionary::from_lines(["Able", " ably ", ""]).unwrap();
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("ABLE"));
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: FxHashSet<String> = lines
            .into_iter()
            .filter_map(|line| {
                let trimmed = line.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(normalize(trimmed))
                }
            })
            .collect();

        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let mut by_length: FxHashMap<usize, Vec<String>> = FxHashMap::default();
        for word in &words {
            by_length.entry(word_len(word)).or_default().push(word.clone());
        }
        // Sorted so a seeded random source always picks the same word
        for bucket in by_length.values_mut() {
            bucket.sort_unstable();
        }

        Ok(Self { words, by_length })
    }

    /// Build a dictionary from an in-memory word list
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no usable words remain.
    pub fn from_slice(slice: &[&str]) -> Result<Self, DictionaryError> {
        Self::from_lines(slice.iter().copied())
    }

    /// Load a newline-delimited dictionary file
    ///
    /// # Errors
    /// Returns `DictionaryError::Io` if the file cannot be read, or
    /// `DictionaryError::Empty` if it holds no words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::from_lines(content.lines())?;
        tracing::info!(
            path = %path.display(),
            words = dictionary.len(),
            "Loaded dictionary"
        );
        Ok(dictionary)
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    /// All words of exactly `length` characters, sorted
    ///
    /// Returns an empty slice if there are none.
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lines_trims_and_lowercases() {
        let dict = Dictionary::from_lines(["  SOUL", "Mate  ", "soil"]).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("soul"));
        assert!(dict.contains("mate"));
        assert!(dict.contains("SOIL"));
    }

    #[test]
    fn from_lines_drops_blank_lines() {
        let dict = Dictionary::from_lines(["able", "", "   ", "\t", "ably"]).unwrap();
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn from_lines_collapses_case_duplicates() {
        let dict = Dictionary::from_lines(["able", "ABLE", "Able"]).unwrap();
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn from_lines_empty_source_fails() {
        let lines: [&str; 0] = [];
        assert!(matches!(
            Dictionary::from_lines(lines),
            Err(DictionaryError::Empty)
        ));
        assert!(matches!(
            Dictionary::from_lines(["", "  "]),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn from_file_missing_path_is_io_error() {
        let result = Dictionary::from_file("/definitely/not/a/real/dictionary.txt");
        assert!(matches!(result, Err(DictionaryError::Io { .. })));
    }

    #[test]
    fn from_file_reads_newline_delimited_words() {
        let path = std::env::temp_dir().join(format!(
            "word_ladder_dictionary_test_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "able\nABLY\n\n  ape  \r\napt\n").unwrap();

        let dict = Dictionary::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dict.len(), 4);
        assert!(dict.contains("ably"));
        assert!(dict.contains("ape"));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let dict = Dictionary::from_slice(&["able"]).unwrap();
        assert!(dict.contains("able"));
        assert!(dict.contains("ABLE"));
        assert!(dict.contains("aBlE"));
        assert!(!dict.contains("ably"));
    }

    #[test]
    fn words_of_length_groups_and_sorts() {
        let dict = Dictionary::from_slice(&["ably", "apt", "able", "ape"]).unwrap();
        assert_eq!(dict.words_of_length(4), ["able", "ably"]);
        assert_eq!(dict.words_of_length(3), ["ape", "apt"]);
        assert!(dict.words_of_length(5).is_empty());
        assert!(dict.words_of_length(0).is_empty());
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(
            DictionaryError::Empty.to_string(),
            "dictionary contains no usable words"
        );
        let err = Dictionary::from_file("/no/such/words.txt").unwrap_err();
        assert!(err.to_string().contains("/no/such/words.txt"));
    }
}
