//! Hangman Engine
//!
//! A hangman round engine with a three-tier hint system. Transitions are pure
//! functions over an immutable [`game::GameState`]; word selection, randomness
//! and notifications are injected.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_engine::core::Word;
//! use hangman_engine::game::{GameState, Outcome, engine};
//! use hangman_engine::random::SeededRandom;
//!
//! let state = GameState::new(Word::new("boston").unwrap());
//! let state = engine::guess(&state, 'o').unwrap();
//! assert_eq!(state.masked_text(), "_O__O_");
//!
//! // The first hint is free
//! let hinted = engine::use_hint(&state, &mut SeededRandom::new(7)).unwrap();
//! assert_eq!(hinted.state.remaining_attempts(), 6);
//! assert_eq!(hinted.state.outcome(), Outcome::InProgress);
//! ```

// Core domain types
pub mod core;

// Injected randomness
pub mod random;

// Round state, transitions and controller
pub mod game;

// Word lists and providers
pub mod wordlists;

// Automated players
pub mod player;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
