//! Game rounds
//!
//! [`GameState`] is the snapshot, [`engine`] holds the pure transitions, and
//! [`RoundController`] wires the transitions to a word provider, a random
//! source and a notification sink.

mod controller;
pub mod engine;
mod error;
mod state;

pub use controller::{
    CollectingSink, FIRST_HINT_MESSAGE, GuessFeedback, HINT_UNAVAILABLE_MESSAGE,
    NO_HINTS_LEFT_MESSAGE, NotificationSink, RoundController, RoundView, TracingSink,
};
pub use engine::HintApplied;
pub use error::GameError;
pub use state::{GameState, HintTier, MAX_ATTEMPTS, MAX_HINTS, Outcome, Violation};
