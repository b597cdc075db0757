//! Core domain types for hangman
//!
//! The letter alphabet and the puzzle word. These types are pure and have no
//! knowledge of rounds, hints or randomness.

mod letter;
mod word;

pub use letter::{ALPHABET_LEN, Letter, LetterSet, VOWELS};
pub use word::{Word, WordError};
