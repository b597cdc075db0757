//! Pure transition engine
//!
//! Every transition takes the current snapshot by reference and returns either
//! a new snapshot or a [`GameError`]. Inputs are never mutated and nothing here
//! performs I/O beyond emitting `tracing` events.
//!
//! # Examples
//! ```
//! use hangman_engine::core::Word;
//! use hangman_engine::game::{GameState, Outcome, engine};
//!
//! let state = GameState::new(Word::new("CAT").unwrap());
//! let state = engine::guess(&state, 'c').unwrap();
//! let state = engine::guess(&state, 'a').unwrap();
//! let state = engine::guess(&state, 't').unwrap();
//!
//! assert_eq!(state.outcome(), Outcome::Won);
//! assert_eq!(state.remaining_attempts(), 6);
//! ```

use super::error::GameError;
use super::state::{GameState, HintTier, Outcome};
use crate::core::{Letter, LetterSet};
use crate::random::RandomSource;
use crate::wordlists::WordProvider;
use tracing::{debug, trace};

/// Result of an accepted hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintApplied {
    /// Snapshot after the hint
    pub state: GameState,
    /// The tier that was consumed
    pub tier: HintTier,
    /// Letters newly ruled out by this hint
    pub disabled: LetterSet,
    /// Letters newly revealed by this hint
    pub revealed: LetterSet,
}

/// Start a fresh round with the next word from `provider`
///
/// # Errors
/// Propagates [`GameError::EmptyWordPool`] from the provider.
pub fn new_game<P: WordProvider + ?Sized>(provider: &mut P) -> Result<GameState, GameError> {
    let secret = provider.next_word()?;
    debug!(word_len = secret.len(), "new round");
    Ok(GameState::new(secret))
}

/// Guess a letter given as a raw character
///
/// ASCII lowercase input is accepted and normalized to uppercase.
///
/// # Errors
/// - [`GameError::GameOver`] if the round is already decided
/// - [`GameError::InvalidLetter`] if `input` is not A-Z
/// - [`GameError::AlreadyResolved`] if the letter was guessed or disabled
pub fn guess(state: &GameState, input: char) -> Result<GameState, GameError> {
    ensure_in_progress(state)?;
    let letter = Letter::new(input).ok_or_else(|| {
        trace!(?input, "rejected non-alphabet guess");
        GameError::InvalidLetter { input }
    })?;
    guess_letter(state, letter)
}

/// Guess an already validated letter
///
/// # Errors
/// - [`GameError::GameOver`] if the round is already decided
/// - [`GameError::AlreadyResolved`] if the letter was guessed or disabled
pub fn guess_letter(state: &GameState, letter: Letter) -> Result<GameState, GameError> {
    ensure_in_progress(state)?;
    if state.is_resolved(letter) {
        trace!(%letter, "letter already resolved");
        return Err(GameError::AlreadyResolved { letter });
    }

    let mut next = state.clone();
    next.guessed.insert(letter);

    let hit = next.secret.contains(letter);
    if hit {
        // Correct guesses never cost an attempt, so only the win check applies
        if next.is_fully_revealed() {
            next.outcome = Outcome::Won;
        }
    } else {
        next.remaining_attempts = next.remaining_attempts.saturating_sub(1);
        if next.remaining_attempts == 0 {
            next.outcome = Outcome::Lost;
        }
    }

    debug!(
        %letter,
        hit,
        remaining = next.remaining_attempts,
        outcome = %next.outcome,
        "guess accepted"
    );
    debug_check(&next);
    Ok(next)
}

/// Consume the next hint tier
///
/// | Tier | Cost | Effect |
/// |------|------|--------|
/// | 1 | 0 | nothing but the usage count |
/// | 2 | 1 | disables a random half (rounded down) of the unresolved letters absent from the secret |
/// | 3 | 1 | reveals the secret's vowels and disables the other vowels |
///
/// Hints need at least two attempts left, so a hint can never lose the round.
/// A tier-3 reveal that completes the word wins it.
///
/// # Errors
/// - [`GameError::GameOver`] if the round is already decided
/// - [`GameError::NoHintsLeft`] once all three tiers are used
/// - [`GameError::HintUnavailable`] with one attempt or fewer left
pub fn use_hint<R: RandomSource>(
    state: &GameState,
    rng: &mut R,
) -> Result<HintApplied, GameError> {
    ensure_in_progress(state)?;

    let Some(tier) = state.next_hint() else {
        trace!(used = state.hint_usage_count, "no hints left");
        return Err(GameError::NoHintsLeft {
            used: state.hint_usage_count,
        });
    };

    if state.remaining_attempts <= 1 {
        trace!(%tier, remaining = state.remaining_attempts, "hint unavailable");
        return Err(GameError::HintUnavailable {
            tier,
            remaining_attempts: state.remaining_attempts,
        });
    }

    let mut next = state.clone();
    let mut revealed = LetterSet::EMPTY;
    let disabled = match tier {
        HintTier::Secret => LetterSet::EMPTY,
        HintTier::DisableHalfWrong => pick_half_wrong(state, rng),
        HintTier::RevealVowels => {
            let vowels = LetterSet::vowels();
            revealed = vowels
                .intersection(state.secret.distinct_letters())
                .difference(state.guessed);
            next.guessed = next.guessed.union(revealed);
            // Vowels already guessed stay guessed; everything else is ruled out
            vowels.difference(next.guessed).difference(next.disabled)
        }
    };

    next.disabled = next.disabled.union(disabled);
    next.remaining_attempts = next.remaining_attempts.saturating_sub(tier.cost());
    next.hint_usage_count += 1;
    if next.is_fully_revealed() {
        next.outcome = Outcome::Won;
    }

    debug!(
        %tier,
        %disabled,
        %revealed,
        remaining = next.remaining_attempts,
        outcome = %next.outcome,
        "hint applied"
    );
    debug_check(&next);

    Ok(HintApplied {
        state: next,
        tier,
        disabled,
        revealed,
    })
}

/// Choose half (rounded down) of the board letters that can never be correct
fn pick_half_wrong<R: RandomSource>(state: &GameState, rng: &mut R) -> LetterSet {
    let mut wrong: Vec<Letter> = state
        .available_letters()
        .difference(state.secret.distinct_letters())
        .iter()
        .collect();
    let count = wrong.len() / 2;
    rng.shuffle(&mut wrong);
    wrong.into_iter().take(count).collect()
}

fn ensure_in_progress(state: &GameState) -> Result<(), GameError> {
    if state.outcome.is_terminal() {
        trace!(outcome = %state.outcome, "event after round end");
        return Err(GameError::GameOver {
            outcome: state.outcome,
        });
    }
    Ok(())
}

fn debug_check(state: &GameState) {
    debug_assert!(
        state.check_invariants().is_empty(),
        "invariants violated: {:?}",
        state.check_invariants()
    );
}
