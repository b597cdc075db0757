//! Round controller
//!
//! Owns the current snapshot and the injected collaborators, applies engine
//! transitions, and turns engine errors into either silent no-ops or
//! notifications for the player.

use super::engine;
use super::error::GameError;
use super::state::{GameState, HintTier, Outcome};
use crate::core::{Letter, LetterSet};
use crate::random::RandomSource;
use crate::wordlists::WordProvider;
use tracing::{info, instrument};

/// Message sent when the first (free) hint is used
pub const FIRST_HINT_MESSAGE: &str = "First Hint: It's a secret!";

/// Message sent when a hint is refused because too few attempts remain
pub const HINT_UNAVAILABLE_MESSAGE: &str = "Hint not available";

/// Message sent when every hint has already been used
pub const NO_HINTS_LEFT_MESSAGE: &str = "No hints left";

/// Side channel for short-lived player notices
pub trait NotificationSink {
    fn notify(&mut self, message: &str);
}

impl<F: FnMut(&str)> NotificationSink for F {
    fn notify(&mut self, message: &str) {
        self(message);
    }
}

/// Records every notification in order
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    messages: Vec<String>,
}

impl CollectingSink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Take all recorded messages, leaving the sink empty
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl NotificationSink for CollectingSink {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Forwards notifications to the `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, message: &str) {
        info!(target: "hangman_engine::notify", "{message}");
    }
}

/// What an accepted guess did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessFeedback {
    /// The letter occurs in the secret at these positions
    Hit { letter: Letter, positions: Vec<usize> },
    /// The letter is not in the secret
    Miss { letter: Letter },
}

/// Read-only projection of the current round for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub remaining_attempts: u8,
    pub hint_usage_count: u8,
    pub outcome: Outcome,
    pub revealed_mask: Vec<Option<Letter>>,
    pub guessed: LetterSet,
    pub disabled: LetterSet,
    pub wrong_guesses: LetterSet,
    pub next_hint: Option<HintTier>,
    /// The full secret, present only once the round is decided
    pub revealed_secret: Option<String>,
}

impl RoundView {
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            remaining_attempts: state.remaining_attempts(),
            hint_usage_count: state.hint_usage_count(),
            outcome: state.outcome(),
            revealed_mask: state.revealed_mask(),
            guessed: state.guessed(),
            disabled: state.disabled(),
            wrong_guesses: state.wrong_guesses(),
            next_hint: state.next_hint(),
            revealed_secret: state.revealed_secret().map(|w| w.text().to_string()),
        }
    }

    /// Letters still selectable on the board
    #[must_use]
    pub const fn available(&self) -> LetterSet {
        self.guessed.union(self.disabled).complement()
    }
}

/// Drives rounds: one mutable snapshot plus its collaborators
pub struct RoundController<P, R, S> {
    provider: P,
    rng: R,
    sink: S,
    state: GameState,
}

impl<P: WordProvider, R: RandomSource, S: NotificationSink> RoundController<P, R, S> {
    /// Create a controller and start the first round
    ///
    /// # Errors
    /// Returns [`GameError::EmptyWordPool`] if the provider has no words.
    pub fn new(mut provider: P, rng: R, sink: S) -> Result<Self, GameError> {
        let state = engine::new_game(&mut provider)?;
        Ok(Self {
            provider,
            rng,
            sink,
            state,
        })
    }

    #[must_use]
    pub const fn current_state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> RoundView {
        RoundView::from_state(&self.state)
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Guess a letter
    ///
    /// Returns `Ok(None)` when the guess is silently ignored (letter already
    /// resolved, or the round is over).
    ///
    /// # Errors
    /// Returns [`GameError::InvalidLetter`] for input outside A-Z.
    #[instrument(skip(self))]
    pub fn guess(&mut self, input: char) -> Result<Option<GuessFeedback>, GameError> {
        let next = match engine::guess(&self.state, input) {
            Ok(next) => next,
            Err(err) if err.is_silent() => return Ok(None),
            Err(err) => return Err(err),
        };

        // The engine accepted it, so `input` is a valid letter
        let Some(letter) = Letter::new(input) else {
            return Err(GameError::InvalidLetter { input });
        };
        let positions = next.secret().positions_of(letter).to_vec();
        let feedback = if positions.is_empty() {
            GuessFeedback::Miss { letter }
        } else {
            GuessFeedback::Hit { letter, positions }
        };

        self.publish(next);
        Ok(Some(feedback))
    }

    /// Use the next hint tier
    ///
    /// Returns the tier that was applied, or `None` if the hint was refused.
    /// Refusals for low attempts or exhausted hints are reported to the sink.
    #[instrument(skip(self))]
    pub fn use_hint(&mut self) -> Option<HintTier> {
        match engine::use_hint(&self.state, &mut self.rng) {
            Ok(applied) => {
                if applied.tier == HintTier::Secret {
                    self.sink.notify(FIRST_HINT_MESSAGE);
                }
                self.publish(applied.state);
                Some(applied.tier)
            }
            Err(GameError::HintUnavailable { .. }) => {
                self.sink.notify(HINT_UNAVAILABLE_MESSAGE);
                None
            }
            Err(GameError::NoHintsLeft { .. }) => {
                self.sink.notify(NO_HINTS_LEFT_MESSAGE);
                None
            }
            Err(_) => None,
        }
    }

    /// Discard the current round and start a new one
    ///
    /// # Errors
    /// Returns [`GameError::EmptyWordPool`]; the current round is kept.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> Result<(), GameError> {
        let fresh = engine::new_game(&mut self.provider)?;
        self.state = fresh;
        Ok(())
    }

    fn publish(&mut self, next: GameState) {
        if next.outcome().is_terminal() && !self.state.outcome().is_terminal() {
            info!(
                outcome = %next.outcome(),
                remaining = next.remaining_attempts(),
                hints = next.hint_usage_count(),
                "round finished"
            );
        }
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::random::ScriptedRandom;
    use crate::wordlists::ScriptedProvider;

    type TestController = RoundController<ScriptedProvider, ScriptedRandom, CollectingSink>;

    fn controller(words: &[&str]) -> TestController {
        let words = words.iter().map(|w| Word::new(w).unwrap()).collect();
        RoundController::new(
            ScriptedProvider::new(words),
            ScriptedRandom::default(),
            CollectingSink::new(),
        )
        .unwrap()
    }

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    #[test]
    fn guess_reports_hits_and_misses() {
        let mut game = controller(&["SCIENCE"]);

        assert_eq!(
            game.guess('c').unwrap(),
            Some(GuessFeedback::Hit {
                letter: letter('C'),
                positions: vec![1, 5]
            })
        );
        assert_eq!(
            game.guess('z').unwrap(),
            Some(GuessFeedback::Miss { letter: letter('Z') })
        );
        assert_eq!(game.view().remaining_attempts, 5);
    }

    #[test]
    fn repeated_and_late_guesses_are_silent() {
        let mut game = controller(&["CAT"]);
        game.guess('x').unwrap();
        assert_eq!(game.guess('X').unwrap(), None);

        for c in "CAT".chars() {
            game.guess(c).unwrap();
        }
        let before = game.current_state().clone();
        assert_eq!(game.guess('Q').unwrap(), None);
        assert_eq!(game.current_state(), &before);
        assert!(game.sink().messages().is_empty());
    }

    #[test]
    fn invalid_letter_surfaces() {
        let mut game = controller(&["CAT"]);
        assert_eq!(
            game.guess('4'),
            Err(GameError::InvalidLetter { input: '4' })
        );
    }

    #[test]
    fn hint_tier_progression() {
        let mut game = controller(&["BOSTON"]);

        assert_eq!(game.use_hint(), Some(HintTier::Secret));
        assert_eq!(game.sink().messages(), [FIRST_HINT_MESSAGE]);
        assert_eq!(game.view().remaining_attempts, 6);

        let disabled_before = game.view().disabled.len();
        assert_eq!(game.use_hint(), Some(HintTier::DisableHalfWrong));
        let view = game.view();
        assert_eq!(view.remaining_attempts, 5);
        // 21 letters are absent from BOSTON, half of them rounded down
        assert_eq!(view.disabled.len() - disabled_before, 10);

        assert_eq!(game.use_hint(), Some(HintTier::RevealVowels));
        let view = game.view();
        assert_eq!(view.remaining_attempts, 4);
        assert!(view.guessed.contains(letter('O')));
        assert!(
            "AEIU"
                .chars()
                .all(|c| view.disabled.contains(letter(c)))
        );
        assert_eq!(view.next_hint, None);
        assert_eq!(game.sink().messages().len(), 1);
    }

    #[test]
    fn hint_blocked_at_low_attempts() {
        let mut game = controller(&["COMPUTER"]);
        for c in "ABDFG".chars() {
            game.guess(c).unwrap();
        }
        assert_eq!(game.view().remaining_attempts, 1);

        let before = game.current_state().clone();
        assert_eq!(game.use_hint(), None);
        assert_eq!(game.sink().messages(), [HINT_UNAVAILABLE_MESSAGE]);
        assert_eq!(game.current_state(), &before);
    }

    #[test]
    fn fourth_hint_reports_none_left() {
        let mut game = controller(&["UNIVERSITY"]);
        for _ in 0..3 {
            assert!(game.use_hint().is_some());
        }
        assert_eq!(game.use_hint(), None);
        assert_eq!(
            game.sink().messages(),
            [FIRST_HINT_MESSAGE, NO_HINTS_LEFT_MESSAGE]
        );
    }

    #[test]
    fn hint_after_round_end_is_silent() {
        let mut game = controller(&["CAT"]);
        for c in "BDEFGH".chars() {
            game.guess(c).unwrap();
        }
        assert_eq!(game.view().outcome, Outcome::Lost);
        assert_eq!(game.use_hint(), None);
        assert!(game.sink().messages().is_empty());
    }

    #[test]
    fn vowel_windfall_wins() {
        let mut game = controller(&["AEIOU"]);
        game.use_hint();
        game.use_hint();
        assert_eq!(game.use_hint(), Some(HintTier::RevealVowels));

        let view = game.view();
        assert_eq!(view.outcome, Outcome::Won);
        assert_eq!(view.remaining_attempts, 4);
        assert_eq!(view.revealed_secret.as_deref(), Some("AEIOU"));
    }

    #[test]
    fn view_masks_secret_until_finished() {
        let mut game = controller(&["CAT"]);
        game.guess('a').unwrap();
        let view = game.view();
        assert_eq!(view.revealed_mask, vec![None, Some(letter('A')), None]);
        assert_eq!(view.revealed_secret, None);
        assert_eq!(view.available().len(), 25);
    }

    #[test]
    fn new_game_resets_round() {
        let mut game = controller(&["CAT", "BOSTON"]);
        game.guess('z').unwrap();
        game.use_hint();

        game.new_game().unwrap();
        let view = game.view();
        assert_eq!(view.remaining_attempts, 6);
        assert_eq!(view.hint_usage_count, 0);
        assert_eq!(view.outcome, Outcome::InProgress);
        assert!(view.guessed.is_empty());
        assert!(view.disabled.is_empty());
        assert_eq!(view.revealed_mask.len(), 6);
    }

    #[test]
    fn empty_pool_fails_construction() {
        let result = RoundController::new(
            ScriptedProvider::new(Vec::new()),
            ScriptedRandom::default(),
            CollectingSink::new(),
        );
        assert!(matches!(result, Err(GameError::EmptyWordPool)));
    }

    #[test]
    fn closure_sink_receives_messages() {
        let mut seen = Vec::new();
        {
            let words = vec![Word::new("CAT").unwrap()];
            let mut game = RoundController::new(
                ScriptedProvider::new(words),
                ScriptedRandom::default(),
                |msg: &str| seen.push(msg.to_string()),
            )
            .unwrap();
            game.use_hint();
        }
        assert_eq!(seen, vec![FIRST_HINT_MESSAGE.to_string()]);
    }

    #[test]
    fn drain_empties_collecting_sink() {
        let mut game = controller(&["CAT"]);
        game.use_hint();
        assert_eq!(game.sink_mut().drain().len(), 1);
        assert!(game.sink().messages().is_empty());
    }
}
