//! Round snapshot
//!
//! `GameState` is an immutable-by-convention value: the transition engine
//! builds a new snapshot for every accepted event and never edits one in place.

use crate::core::{Letter, LetterSet, Word};
use std::fmt;

/// Wrong guesses allowed per round
pub const MAX_ATTEMPTS: u8 = 6;

/// Hints available per round
pub const MAX_HINTS: u8 = 3;

/// Status of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    /// `true` once the round has been decided
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// The three hints, in the order they are handed out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HintTier {
    /// Free flavor message, no effect on the board
    Secret,
    /// Rules out half of the remaining wrong letters
    DisableHalfWrong,
    /// Reveals the vowels of the secret and rules out the rest
    RevealVowels,
}

impl HintTier {
    /// Tier that the next hint will be, given how many were already used
    #[must_use]
    pub const fn from_usage(hints_used: u8) -> Option<Self> {
        match hints_used {
            0 => Some(Self::Secret),
            1 => Some(Self::DisableHalfWrong),
            2 => Some(Self::RevealVowels),
            _ => None,
        }
    }

    /// 1-based rank of the tier
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Secret => 1,
            Self::DisableHalfWrong => 2,
            Self::RevealVowels => 3,
        }
    }

    /// Attempts consumed by the hint
    #[must_use]
    pub const fn cost(self) -> u8 {
        match self {
            Self::Secret => 0,
            Self::DisableHalfWrong | Self::RevealVowels => 1,
        }
    }

    /// Button caption for offering this hint
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Secret => "Show Hint (no cost)",
            Self::DisableHalfWrong => "Disable Half Wrong (cost 1 turn)",
            Self::RevealVowels => "Reveal Vowels (cost 1 turn)",
        }
    }
}

impl fmt::Display for HintTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Secret => "secret",
            Self::DisableHalfWrong => "disable half wrong",
            Self::RevealVowels => "reveal vowels",
        };
        write!(f, "tier {} ({name})", self.number())
    }
}

/// A broken state invariant, reported by [`GameState::check_invariants`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    GuessedDisabledOverlap,
    AttemptsOutOfRange,
    HintsOutOfRange,
    /// `Won` without a full reveal, or a full reveal without `Won`
    WinMismatch,
    LostWithAttemptsLeft,
    ExhaustedWhileInProgress,
}

/// Snapshot of a single round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) secret: Word,
    pub(crate) guessed: LetterSet,
    pub(crate) disabled: LetterSet,
    pub(crate) remaining_attempts: u8,
    pub(crate) hint_usage_count: u8,
    pub(crate) outcome: Outcome,
}

impl GameState {
    /// Fresh round for the given secret
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self {
            secret,
            guessed: LetterSet::EMPTY,
            disabled: LetterSet::EMPTY,
            remaining_attempts: MAX_ATTEMPTS,
            hint_usage_count: 0,
            outcome: Outcome::InProgress,
        }
    }

    /// The secret, available only once the round is decided
    #[must_use]
    pub const fn revealed_secret(&self) -> Option<&Word> {
        if self.outcome.is_terminal() {
            Some(&self.secret)
        } else {
            None
        }
    }

    #[inline]
    pub(crate) const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Letters picked by the player or revealed by hints
    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> LetterSet {
        self.guessed
    }

    /// Letters ruled out by hints
    #[inline]
    #[must_use]
    pub const fn disabled(&self) -> LetterSet {
        self.disabled
    }

    #[inline]
    #[must_use]
    pub const fn remaining_attempts(&self) -> u8 {
        self.remaining_attempts
    }

    #[inline]
    #[must_use]
    pub const fn hint_usage_count(&self) -> u8 {
        self.hint_usage_count
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Attempts consumed so far by wrong guesses and paid hints
    #[must_use]
    pub const fn attempts_used(&self) -> u8 {
        MAX_ATTEMPTS - self.remaining_attempts
    }

    /// Number of letters in the secret
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.secret.len()
    }

    /// Whether a letter has been guessed or disabled
    #[must_use]
    pub const fn is_resolved(&self, letter: Letter) -> bool {
        self.guessed.contains(letter) || self.disabled.contains(letter)
    }

    /// Letters still selectable on the board
    #[must_use]
    pub const fn available_letters(&self) -> LetterSet {
        self.guessed.union(self.disabled).complement()
    }

    /// Guessed letters that are not in the secret
    #[must_use]
    pub const fn wrong_guesses(&self) -> LetterSet {
        self.guessed.difference(self.secret.distinct_letters())
    }

    /// Every letter of the secret has been guessed
    #[must_use]
    pub const fn is_fully_revealed(&self) -> bool {
        self.secret.distinct_letters().is_subset(self.guessed)
    }

    /// Tier of the next hint, or `None` when all hints are spent
    #[must_use]
    pub const fn next_hint(&self) -> Option<HintTier> {
        HintTier::from_usage(self.hint_usage_count)
    }

    /// One slot per secret position: the letter if guessed, otherwise `None`
    #[must_use]
    pub fn revealed_mask(&self) -> Vec<Option<Letter>> {
        self.secret
            .letters()
            .iter()
            .map(|&l| self.guessed.contains(l).then_some(l))
            .collect()
    }

    /// The mask as text, with `_` for hidden positions
    ///
    /// # Examples
    /// ```
    /// use hangman_engine::core::Word;
    /// use hangman_engine::game::{GameState, engine};
    ///
    /// let state = GameState::new(Word::new("BOSTON").unwrap());
    /// let state = engine::guess(&state, 'o').unwrap();
    /// assert_eq!(state.masked_text(), "_O__O_");
    /// ```
    #[must_use]
    pub fn masked_text(&self) -> String {
        self.revealed_mask()
            .into_iter()
            .map(|slot| slot.map_or('_', Letter::as_char))
            .collect()
    }

    /// List every invariant the snapshot breaks (empty when healthy)
    #[must_use]
    pub fn check_invariants(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if !self.guessed.is_disjoint(self.disabled) {
            violations.push(Violation::GuessedDisabledOverlap);
        }
        if self.remaining_attempts > MAX_ATTEMPTS {
            violations.push(Violation::AttemptsOutOfRange);
        }
        if self.hint_usage_count > MAX_HINTS {
            violations.push(Violation::HintsOutOfRange);
        }
        if (self.outcome == Outcome::Won) != self.is_fully_revealed() {
            violations.push(Violation::WinMismatch);
        }
        if self.outcome == Outcome::Lost && self.remaining_attempts != 0 {
            violations.push(Violation::LostWithAttemptsLeft);
        }
        if self.remaining_attempts == 0 && self.outcome == Outcome::InProgress {
            violations.push(Violation::ExhaustedWhileInProgress);
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(secret: &str) -> GameState {
        GameState::new(Word::new(secret).unwrap())
    }

    fn letters(text: &str) -> LetterSet {
        text.chars().filter_map(Letter::new).collect()
    }

    #[test]
    fn fresh_state_defaults() {
        let s = state("boston");
        assert_eq!(s.remaining_attempts(), MAX_ATTEMPTS);
        assert_eq!(s.hint_usage_count(), 0);
        assert_eq!(s.outcome(), Outcome::InProgress);
        assert!(s.guessed().is_empty());
        assert!(s.disabled().is_empty());
        assert_eq!(s.available_letters().len(), 26);
        assert!(s.check_invariants().is_empty());
    }

    #[test]
    fn secret_hidden_until_round_ends() {
        let mut s = state("cat");
        assert!(s.revealed_secret().is_none());

        s.outcome = Outcome::Lost;
        s.remaining_attempts = 0;
        assert_eq!(s.revealed_secret().map(Word::text), Some("CAT"));
    }

    #[test]
    fn mask_reflects_guessed_letters() {
        let mut s = state("science");
        s.guessed = letters("CE");
        assert_eq!(s.masked_text(), "_C_E_CE");
        assert_eq!(s.revealed_mask().len(), 7);
    }

    #[test]
    fn wrong_guesses_exclude_hits() {
        let mut s = state("cat");
        s.guessed = letters("CXZ");
        assert_eq!(s.wrong_guesses(), letters("XZ"));
    }

    #[test]
    fn hint_tiers_follow_usage() {
        assert_eq!(HintTier::from_usage(0), Some(HintTier::Secret));
        assert_eq!(HintTier::from_usage(1), Some(HintTier::DisableHalfWrong));
        assert_eq!(HintTier::from_usage(2), Some(HintTier::RevealVowels));
        assert_eq!(HintTier::from_usage(3), None);
        assert_eq!(HintTier::Secret.cost(), 0);
        assert_eq!(HintTier::RevealVowels.cost(), 1);
        assert_eq!(HintTier::DisableHalfWrong.number(), 2);
    }

    #[test]
    fn invariant_checks_detect_violations() {
        let mut s = state("cat");
        s.guessed = letters("A");
        s.disabled = letters("A");
        assert!(s.check_invariants().contains(&Violation::GuessedDisabledOverlap));

        let mut s = state("cat");
        s.guessed = letters("CAT");
        assert_eq!(s.check_invariants(), vec![Violation::WinMismatch]);

        let mut s = state("cat");
        s.remaining_attempts = 0;
        assert_eq!(
            s.check_invariants(),
            vec![Violation::ExhaustedWhileInProgress]
        );

        let mut s = state("cat");
        s.outcome = Outcome::Lost;
        assert_eq!(s.check_invariants(), vec![Violation::LostWithAttemptsLeft]);
    }
}
