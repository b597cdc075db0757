//! Word providers
//!
//! A provider hands the engine one secret per round.

use super::{DEFAULT_POOL, words_from_slice};
use crate::core::Word;
use crate::game::GameError;
use crate::random::RandomSource;
use tracing::trace;

/// Supplies the secret for each new round
pub trait WordProvider {
    /// Next secret word
    ///
    /// # Errors
    /// Returns [`GameError::EmptyWordPool`] when there is nothing to draw from.
    fn next_word(&mut self) -> Result<Word, GameError>;
}

impl<P: WordProvider + ?Sized> WordProvider for &mut P {
    fn next_word(&mut self) -> Result<Word, GameError> {
        (**self).next_word()
    }
}

/// Draws uniformly at random from a fixed pool
#[derive(Debug, Clone)]
pub struct PoolProvider<R> {
    words: Vec<Word>,
    rng: R,
}

impl<R: RandomSource> PoolProvider<R> {
    #[must_use]
    pub const fn new(words: Vec<Word>, rng: R) -> Self {
        Self { words, rng }
    }

    /// Provider over `BOSTON, UNIVERSITY, COMPUTER, SCIENCE`
    #[must_use]
    pub fn with_default_pool(rng: R) -> Self {
        Self::new(words_from_slice(&DEFAULT_POOL), rng)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl<R: RandomSource> WordProvider for PoolProvider<R> {
    fn next_word(&mut self) -> Result<Word, GameError> {
        if self.words.is_empty() {
            return Err(GameError::EmptyWordPool);
        }
        let index = self.rng.next_uniform(self.words.len());
        trace!(index, pool = self.words.len(), "drew word");
        Ok(self.words[index].clone())
    }
}

/// Replays a fixed list of words in order, wrapping around at the end
#[derive(Debug, Clone, Default)]
pub struct ScriptedProvider {
    words: Vec<Word>,
    cursor: usize,
}

impl ScriptedProvider {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words, cursor: 0 }
    }
}

impl WordProvider for ScriptedProvider {
    fn next_word(&mut self) -> Result<Word, GameError> {
        if self.words.is_empty() {
            return Err(GameError::EmptyWordPool);
        }
        let word = self.words[self.cursor % self.words.len()].clone();
        self.cursor += 1;
        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedRandom, SeededRandom};

    #[test]
    fn pool_provider_uses_injected_draws() {
        let mut provider = PoolProvider::with_default_pool(ScriptedRandom::new(vec![2, 0, 3]));
        let drawn: Vec<String> = (0..3)
            .map(|_| provider.next_word().unwrap().text().to_string())
            .collect();
        assert_eq!(drawn, ["COMPUTER", "BOSTON", "SCIENCE"]);
    }

    #[test]
    fn pool_provider_draws_every_word_eventually() {
        let mut provider = PoolProvider::with_default_pool(SeededRandom::new(5));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(provider.next_word().unwrap().text().to_string());
        }
        assert_eq!(seen.len(), DEFAULT_POOL.len());
    }

    #[test]
    fn empty_pool_fails() {
        let mut provider = PoolProvider::new(Vec::new(), SeededRandom::new(0));
        assert_eq!(provider.next_word(), Err(GameError::EmptyWordPool));

        let mut scripted = ScriptedProvider::default();
        assert_eq!(scripted.next_word(), Err(GameError::EmptyWordPool));
    }

    #[test]
    fn scripted_provider_cycles() {
        let words = vec![Word::new("cat").unwrap(), Word::new("dog").unwrap()];
        let mut provider = ScriptedProvider::new(words);
        let drawn: Vec<String> = (0..3)
            .map(|_| provider.next_word().unwrap().to_string())
            .collect();
        assert_eq!(drawn, ["CAT", "DOG", "CAT"]);
    }

    #[test]
    fn mutable_reference_is_a_provider() {
        fn draw<P: WordProvider>(mut provider: P) -> Result<Word, GameError> {
            provider.next_word()
        }

        let mut provider = ScriptedProvider::new(vec![Word::new("cat").unwrap()]);
        assert!(draw(&mut provider).is_ok());
        assert_eq!(provider.cursor, 1);
    }
}
