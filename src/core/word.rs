//! Secret word representation
//!
//! A `Word` stores a non-empty uppercase A-Z word along with letter position
//! indices used to reveal hits.

use super::{Letter, LetterSet};
use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// A puzzle word made only of uppercase letters
///
/// Input is uppercased on construction, so `Word::new("boston")` and
/// `Word::new("BOSTON")` are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<Letter>,
    distinct: LetterSet,
    positions: FxHashMap<Letter, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word contains invalid character {0:?} (only A-Z allowed)")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty
    /// - Any character is outside A-Z after uppercasing
    ///
    /// # Examples
    /// ```
    /// use hangman_engine::core::Word;
    ///
    /// let word = Word::new("boston").unwrap();
    /// assert_eq!(word.text(), "BOSTON");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("new york").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let raw = text.as_ref();
        if raw.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = raw
            .chars()
            .map(|c| Letter::new(c).ok_or(WordError::InvalidCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut positions: FxHashMap<Letter, Vec<usize>> = FxHashMap::default();
        for (i, &letter) in letters.iter().enumerate() {
            positions.entry(letter).or_default().push(i);
        }

        Ok(Self {
            text: letters.iter().map(|l| l.as_char()).collect(),
            distinct: letters.iter().copied().collect(),
            letters,
            positions,
        })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters of the word in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// The set of distinct letters in the word
    #[inline]
    #[must_use]
    pub const fn distinct_letters(&self) -> LetterSet {
        self.distinct
    }

    /// Number of letters, counting repeats
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always `false`; construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.distinct.contains(letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn word_creation_valid() {
        let word = Word::new("SCIENCE").unwrap();
        assert_eq!(word.text(), "SCIENCE");
        assert_eq!(word.len(), 7);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("computer").unwrap();
        assert_eq!(word.text(), "COMPUTER");

        let mixed = Word::new("CoMpUtEr").unwrap();
        assert_eq!(word, mixed);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cat3"), Err(WordError::InvalidCharacter('3')));
        assert_eq!(Word::new("ca t"), Err(WordError::InvalidCharacter(' ')));
        assert_eq!(Word::new("café"), Err(WordError::InvalidCharacter('é')));
    }

    #[test]
    fn word_contains() {
        let word = Word::new("boston").unwrap();
        assert!(word.contains(letter('B')));
        assert!(word.contains(letter('o')));
        assert!(!word.contains(letter('A')));
    }

    #[test]
    fn word_distinct_letters() {
        let word = Word::new("university").unwrap();
        assert_eq!(word.distinct_letters().to_string(), "EINRSTUVY");
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("science").unwrap();
        assert_eq!(word.positions_of(letter('C')), &[1, 5]);
        assert_eq!(word.positions_of(letter('E')), &[3, 6]);
        assert_eq!(word.positions_of(letter('S')), &[0]);
        assert_eq!(word.positions_of(letter('Z')), &[] as &[usize]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("boston").unwrap();
        assert_eq!(format!("{word}"), "BOSTON");
    }
}
