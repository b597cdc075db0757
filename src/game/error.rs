//! Errors reported by the transition engine and word providers

use super::state::{HintTier, Outcome};
use crate::core::Letter;
use thiserror::Error;

/// Why an event was rejected
///
/// A rejected event never changes the state it was applied to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("{input:?} is not a letter A-Z")]
    InvalidLetter { input: char },

    #[error("letter {letter} has already been guessed or ruled out")]
    AlreadyResolved { letter: Letter },

    #[error("the round is over ({outcome})")]
    GameOver { outcome: Outcome },

    #[error("all {used} hints have been used")]
    NoHintsLeft { used: u8 },

    #[error("{tier} is unavailable with {remaining_attempts} attempt(s) left")]
    HintUnavailable {
        tier: HintTier,
        remaining_attempts: u8,
    },

    #[error("the word pool is empty")]
    EmptyWordPool,
}

impl GameError {
    /// Rejections a front end can ignore without telling the player
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        matches!(self, Self::AlreadyResolved { .. } | Self::GameOver { .. })
    }
}
