//! Word list loading utilities
//!
//! Provides functions to load word pools from files or from string slices.

use crate::core::{Word, WordError};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error loading a word list file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {source}")]
    InvalidWord {
        line: usize,
        #[source]
        source: WordError,
    },

    #[error("word list contains no words")]
    Empty,
}

/// Load words from a file
///
/// One word per line. Blank lines and lines starting with `#` are skipped;
/// any other line must be a valid word.
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read, a line is not a valid
/// word, or no words remain after skipping comments.
///
/// # Examples
/// ```no_run
/// use hangman_engine::wordlists::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_words(&content)
}

fn parse_words(content: &str) -> Result<Vec<Word>, LoadError> {
    let words = content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some(
                    Word::new(trimmed)
                        .map_err(|source| LoadError::InvalidWord { line: i + 1, source }),
                )
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    if words.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(words)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use hangman_engine::wordlists::{DEFAULT_POOL, words_from_slice};
///
/// let words = words_from_slice(&DEFAULT_POOL);
/// assert_eq!(words.len(), DEFAULT_POOL.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["boston", "Science", "COMPUTER"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "BOSTON");
        assert_eq!(words[1].text(), "SCIENCE");
        assert_eq!(words[2].text(), "COMPUTER");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["boston", "new york", "", "r2d2", "science"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "BOSTON");
        assert_eq!(words[1].text(), "SCIENCE");
    }

    #[test]
    fn parse_skips_blank_and_comment_lines() {
        let words = parse_words("# campus words\nboston\n\n  science  \n").unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "SCIENCE");
    }

    #[test]
    fn parse_reports_line_of_invalid_word() {
        let err = parse_words("boston\nnew york\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidWord {
                line: 2,
                source: WordError::InvalidCharacter(' ')
            }
        ));
    }

    #[test]
    fn parse_rejects_empty_list() {
        assert!(matches!(parse_words("# nothing\n\n"), Err(LoadError::Empty)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/a/real/path/words.txt");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
