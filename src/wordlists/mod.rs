//! Word pools and word providers
//!
//! The default pool is compiled into the binary; custom pools can be loaded
//! from a file with one word per line.

pub mod loader;
mod provider;

pub use loader::{LoadError, load_from_file, words_from_slice};
pub use provider::{PoolProvider, ScriptedProvider, WordProvider};

/// Words used when no custom word list is given
pub const DEFAULT_POOL: [&str; 4] = ["BOSTON", "UNIVERSITY", "COMPUTER", "SCIENCE"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pool_words_are_valid() {
        let words = words_from_slice(&DEFAULT_POOL);
        assert_eq!(words.len(), DEFAULT_POOL.len());
    }

    #[test]
    fn default_pool_is_uppercase() {
        for &word in &DEFAULT_POOL {
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }
}
