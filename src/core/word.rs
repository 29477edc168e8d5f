//! Word-level helpers
//!
//! Case normalization, letter-difference counting and per-position target
//! matching. Lengths and positions are measured in `char`s throughout.

/// Normalize a word for comparison against the dictionary
///
/// # Examples
/// ```
/// use word_ladder::core::normalize;
///
/// assert_eq!(normalize("SoUl"), "soul");
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// Length of a word in characters
#[inline]
#[must_use]
pub fn word_len(word: &str) -> usize {
    word.chars().count()
}

/// Count the positions at which two words differ
///
/// Positions past the end of the shorter word are not counted, so callers
/// compare equal-length words only.
///
/// # Examples
/// ```
/// use word_ladder::core::hamming_distance;
///
/// assert_eq!(hamming_distance("able", "ably"), 1);
/// assert_eq!(hamming_distance("able", "aces"), 3);
/// assert_eq!(hamming_distance("soul", "soul"), 0);
/// ```
#[must_use]
pub fn hamming_distance(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

/// Check each position of `word` against the same position of `target`
///
/// Front ends use this to highlight letters already in place.
#[must_use]
pub fn letter_matches(word: &str, target: &str) -> Vec<bool> {
    let mut target_chars = target.chars();
    word.chars()
        .map(|ch| target_chars.next() == Some(ch))
        .collect()
}
