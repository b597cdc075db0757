//! Automated players
//!
//! A [`Player`] looks at the observable round and picks the next move. Players
//! drive the simulation command and never see the secret.

mod strategies;

pub use strategies::{FREQUENCY_ORDER, FrequencyPlayer, RandomPlayer};

use crate::core::Letter;
use crate::game::{HintTier, MAX_HINTS, NotificationSink, Outcome, RoundController, RoundView};
use crate::random::{RandomSource, SeededRandom};
use crate::wordlists::WordProvider;

/// Remaining attempts at or above which hint-using players spend a hint
pub const HINT_THRESHOLD: u8 = 4;

/// A move chosen by a player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Guess(Letter),
    Hint,
}

/// Picks moves for an in-progress round
pub trait Player {
    /// Choose the next move, or `None` if there is nothing left to try
    fn choose(&mut self, view: &RoundView) -> Option<Move>;
}

/// Enum wrapper for all player types
///
/// Allows runtime selection of a player while maintaining static dispatch.
pub enum PlayerKind {
    /// Guesses in English letter-frequency order (default)
    Frequency(FrequencyPlayer),
    /// Guesses uniformly among the letters still on the board
    Random(RandomPlayer<SeededRandom>),
}

impl Player for PlayerKind {
    fn choose(&mut self, view: &RoundView) -> Option<Move> {
        match self {
            Self::Frequency(p) => p.choose(view),
            Self::Random(p) => p.choose(view),
        }
    }
}

impl PlayerKind {
    /// Create a player from its name
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, use_hints: bool, seed: u64) -> Self {
        match name {
            "random" => Self::Random(RandomPlayer::new(SeededRandom::new(seed), use_hints)),
            _ => Self::Frequency(FrequencyPlayer::new(use_hints)),
        }
    }
}

/// Summary of one automatically played round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub secret: String,
    pub outcome: Outcome,
    pub remaining_attempts: u8,
    pub hints_used: u8,
    pub guesses: usize,
    /// The round was won by the vowel-reveal hint
    pub windfall: bool,
}

/// Let `player` play the controller's current round to the end
///
/// Stops early if the player gives up or keeps asking for refused hints.
pub fn play_round<P, R, S, Pl>(
    controller: &mut RoundController<P, R, S>,
    player: &mut Pl,
) -> RoundRecord
where
    P: WordProvider,
    R: RandomSource,
    S: NotificationSink,
    Pl: Player + ?Sized,
{
    let mut guesses = 0;
    let mut windfall = false;
    // Every step resolves a letter or consumes a hint
    let max_steps = 26 + usize::from(MAX_HINTS) + 1;

    for _ in 0..max_steps {
        let view = controller.view();
        if view.outcome.is_terminal() {
            break;
        }
        match player.choose(&view) {
            Some(Move::Guess(letter)) => {
                if let Ok(Some(_)) = controller.guess(letter.as_char()) {
                    guesses += 1;
                }
            }
            Some(Move::Hint) => {
                let tier = controller.use_hint();
                if tier == Some(HintTier::RevealVowels)
                    && controller.current_state().outcome() == Outcome::Won
                {
                    windfall = true;
                }
            }
            None => break,
        }
    }

    let state = controller.current_state();
    RoundRecord {
        secret: state
            .revealed_secret()
            .map_or_else(|| state.masked_text(), |w| w.text().to_string()),
        outcome: state.outcome(),
        remaining_attempts: state.remaining_attempts(),
        hints_used: state.hint_usage_count(),
        guesses,
        windfall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::CollectingSink;
    use crate::random::ScriptedRandom;
    use crate::wordlists::ScriptedProvider;

    fn controller(
        word: &str,
    ) -> RoundController<ScriptedProvider, ScriptedRandom, CollectingSink> {
        RoundController::new(
            ScriptedProvider::new(vec![Word::new(word).unwrap()]),
            ScriptedRandom::default(),
            CollectingSink::new(),
        )
        .unwrap()
    }

    /// Always asks for a hint
    struct HintSpammer;

    impl Player for HintSpammer {
        fn choose(&mut self, _view: &RoundView) -> Option<Move> {
            Some(Move::Hint)
        }
    }

    #[test]
    fn frequency_player_finishes_round() {
        let mut game = controller("SCIENCE");
        let mut player = PlayerKind::from_name("frequency", false, 0);
        let record = play_round(&mut game, &mut player);

        assert!(record.outcome.is_terminal());
        assert_eq!(record.hints_used, 0);
        assert!(!record.windfall);
    }

    #[test]
    fn frequency_player_wins_easy_word() {
        // E, T, A are the first three frequency picks
        let mut game = controller("TEA");
        let record = play_round(&mut game, &mut FrequencyPlayer::new(false));

        assert_eq!(record.outcome, Outcome::Won);
        assert_eq!(record.guesses, 3);
        assert_eq!(record.remaining_attempts, 6);
        assert_eq!(record.secret, "TEA");
    }

    #[test]
    fn hint_player_records_windfall() {
        let mut game = controller("AEIOU");
        let record = play_round(&mut game, &mut FrequencyPlayer::new(true));

        assert_eq!(record.outcome, Outcome::Won);
        assert!(record.windfall);
        assert_eq!(record.hints_used, 3);
        assert_eq!(record.guesses, 0);
    }

    #[test]
    fn refused_hints_do_not_loop_forever() {
        let mut game = controller("CAT");
        let record = play_round(&mut game, &mut HintSpammer);

        assert_eq!(record.outcome, Outcome::InProgress);
        assert_eq!(record.hints_used, 3);
        // Only the vowel reveal shows anything
        assert_eq!(record.secret, "_A_");
        assert_eq!(record.remaining_attempts, 4);
    }

    #[test]
    fn random_player_finishes_round() {
        let mut game = controller("UNIVERSITY");
        let mut player = PlayerKind::from_name("random", true, 17);
        let record = play_round(&mut game, &mut player);
        assert!(record.outcome.is_terminal());
    }
}
