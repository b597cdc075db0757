//! Concrete players

use super::{HINT_THRESHOLD, Move, Player};
use crate::core::Letter;
use crate::game::RoundView;
use crate::random::RandomSource;

/// English letters from most to least common
pub const FREQUENCY_ORDER: &str = "ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// Whether a hint-using player should spend the next hint now
fn wants_hint(use_hints: bool, view: &RoundView) -> bool {
    use_hints && view.next_hint.is_some() && view.remaining_attempts >= HINT_THRESHOLD
}

/// Frequency-order player
///
/// Guesses the most common English letter still on the board. With hints
/// enabled it spends every hint up front, while attempts are plentiful.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyPlayer {
    use_hints: bool,
}

impl FrequencyPlayer {
    #[must_use]
    pub const fn new(use_hints: bool) -> Self {
        Self { use_hints }
    }
}

impl Player for FrequencyPlayer {
    fn choose(&mut self, view: &RoundView) -> Option<Move> {
        if wants_hint(self.use_hints, view) {
            return Some(Move::Hint);
        }
        let available = view.available();
        FREQUENCY_ORDER
            .chars()
            .filter_map(Letter::new)
            .find(|&letter| available.contains(letter))
            .map(Move::Guess)
    }
}

/// Uniform random player
///
/// Useful as a baseline for the frequency player.
#[derive(Debug, Clone)]
pub struct RandomPlayer<R> {
    rng: R,
    use_hints: bool,
}

impl<R: RandomSource> RandomPlayer<R> {
    #[must_use]
    pub const fn new(rng: R, use_hints: bool) -> Self {
        Self { rng, use_hints }
    }
}

impl<R: RandomSource> Player for RandomPlayer<R> {
    fn choose(&mut self, view: &RoundView) -> Option<Move> {
        if wants_hint(self.use_hints, view) {
            return Some(Move::Hint);
        }
        let available: Vec<Letter> = view.available().iter().collect();
        if available.is_empty() {
            return None;
        }
        let pick = self.rng.next_uniform(available.len());
        Some(Move::Guess(available[pick]))
    }
}
