//! Terminal output formatting
//!
//! Display utilities for the text front end and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_guess_feedback, print_hint_applied, print_notification, print_outcome, print_round,
    print_simulation_stats,
};
