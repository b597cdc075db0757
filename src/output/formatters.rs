//! Formatting utilities for terminal output

use crate::core::Letter;
use crate::game::{HintTier, MAX_ATTEMPTS, Outcome, RoundView};

/// Letters per row on the letter board
pub const BOARD_ROW_LEN: usize = 7;

/// How a letter appears on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStatus {
    Available,
    /// Guessed and in the secret
    Hit,
    /// Guessed and not in the secret
    Miss,
    /// Ruled out by a hint
    Disabled,
}

/// Board status of a single letter
#[must_use]
pub const fn letter_status(view: &RoundView, letter: Letter) -> LetterStatus {
    if view.disabled.contains(letter) {
        LetterStatus::Disabled
    } else if view.wrong_guesses.contains(letter) {
        LetterStatus::Miss
    } else if view.guessed.contains(letter) {
        LetterStatus::Hit
    } else {
        LetterStatus::Available
    }
}

/// The alphabet split into board rows, each letter with its status
#[must_use]
pub fn letter_rows(view: &RoundView) -> Vec<Vec<(Letter, LetterStatus)>> {
    let letters: Vec<(Letter, LetterStatus)> = Letter::all()
        .map(|letter| (letter, letter_status(view, letter)))
        .collect();
    letters
        .chunks(BOARD_ROW_LEN)
        .map(<[(Letter, LetterStatus)]>::to_vec)
        .collect()
}

/// Format the revealed mask with spaces, e.g. `B _ S _ _ N`
#[must_use]
pub fn spaced_mask(mask: &[Option<Letter>]) -> String {
    mask.iter()
        .map(|slot| slot.map_or('_', Letter::as_char).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Caption for the hint button given the next available tier
#[must_use]
pub const fn hint_button_label(next: Option<HintTier>) -> &'static str {
    match next {
        Some(tier) => tier.label(),
        None => "No Hints Left",
    }
}

/// Result line for a finished round
#[must_use]
pub const fn outcome_banner(outcome: Outcome) -> Option<&'static str> {
    match outcome {
        Outcome::Won => Some("You Won!"),
        Outcome::Lost => Some("You Lost!"),
        Outcome::InProgress => None,
    }
}

/// ASCII gallows with one body part per used attempt
#[must_use]
pub fn gallows(attempts_used: u8) -> [String; 7] {
    let part = |stage: u8, c: char| if attempts_used >= stage { c } else { ' ' };
    let head = part(1, 'O');
    let body = part(2, '|');
    let left_arm = part(3, '/');
    let right_arm = part(4, '\\');
    let left_leg = part(5, '/');
    let right_leg = part(6, '\\');

    [
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {head}   |"),
        format!(" {left_arm}{body}{right_arm}  |"),
        format!(" {left_leg} {right_leg}  |"),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining attempts as a bar, one cell per attempt
#[must_use]
pub fn attempts_bar(remaining: u8) -> String {
    let filled = remaining.min(MAX_ATTEMPTS);
    format!(
        "{}{}",
        "█".repeat(usize::from(filled)),
        "░".repeat(usize::from(MAX_ATTEMPTS - filled))
    )
}
