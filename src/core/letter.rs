//! Letters of the game alphabet
//!
//! A `Letter` is one of the 26 uppercase ASCII letters A-Z. A `LetterSet` is a
//! bit set over that alphabet, one bit per letter, so game snapshots stay `Copy`
//! and set algebra is a handful of integer operations.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// A single uppercase letter in `A..=Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// The five vowels, in alphabetical order
pub const VOWELS: [Letter; 5] = [
    Letter(b'A'),
    Letter(b'E'),
    Letter(b'I'),
    Letter(b'O'),
    Letter(b'U'),
];

impl Letter {
    /// Create a letter from a character, normalizing ASCII case
    ///
    /// Returns `None` for anything outside the A-Z alphabet.
    ///
    /// # Examples
    /// ```
    /// use hangman_engine::core::Letter;
    ///
    /// assert_eq!(Letter::new('q'), Letter::new('Q'));
    /// assert_eq!(Letter::new('Q').unwrap().as_char(), 'Q');
    /// assert!(Letter::new('é').is_none());
    /// assert!(Letter::new('3').is_none());
    /// ```
    #[must_use]
    pub const fn new(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Some(Self(upper as u8))
        } else {
            None
        }
    }

    /// Create a letter from its alphabet index (0 = A, 25 = Z)
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < ALPHABET_LEN {
            Some(Self(b'A' + index))
        } else {
            None
        }
    }

    /// Alphabet index of this letter (0 = A, 25 = Z)
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0 - b'A'
    }

    /// The letter as an uppercase `char`
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    #[inline]
    #[must_use]
    pub const fn is_vowel(self) -> bool {
        matches!(self.0, b'A' | b'E' | b'I' | b'O' | b'U')
    }

    /// Iterate over the whole alphabet, A to Z
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ALPHABET_LEN as u8).map(|i| Self(b'A' + i))
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c).ok_or(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A set of letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    const FULL_MASK: u32 = (1 << ALPHABET_LEN) - 1;

    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter A-Z
    pub const ALL: Self = Self(Self::FULL_MASK);

    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// The set `{A, E, I, O, U}`
    #[must_use]
    pub fn vowels() -> Self {
        VOWELS.into_iter().collect()
    }

    #[inline]
    const fn bit(letter: Letter) -> u32 {
        1 << letter.index()
    }

    /// Insert a letter, returning `true` if it was not already present
    pub fn insert(&mut self, letter: Letter) -> bool {
        let added = !self.contains(letter);
        self.0 |= Self::bit(letter);
        added
    }

    /// Remove a letter, returning `true` if it was present
    pub fn remove(&mut self, letter: Letter) -> bool {
        let present = self.contains(letter);
        self.0 &= !Self::bit(letter);
        present
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in `self` that are not in `other`
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Letters of the alphabet not in `self`
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::FULL_MASK)
    }

    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate over members in alphabetical order
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { remaining: self.0 }
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Letter> for LetterSet {
    fn extend<I: IntoIterator<Item = Letter>>(&mut self, iter: I) {
        for letter in iter {
            self.insert(letter);
        }
    }
}

impl IntoIterator for LetterSet {
    type Item = Letter;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Alphabetical iterator over a [`LetterSet`]
#[derive(Debug, Clone)]
pub struct Iter {
    remaining: u32,
}

impl Iterator for Iter {
    type Item = Letter;

    fn next(&mut self) -> Option<Letter> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.remaining.trailing_zeros() as u8;
        // Clear the lowest set bit
        self.remaining &= self.remaining - 1;
        Letter::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
