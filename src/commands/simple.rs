//! Simple interactive CLI mode
//!
//! Line-based hangman without the TUI

use crate::game::{GameError, RoundController};
use crate::output::{
    print_guess_feedback, print_hint_applied, print_notification, print_outcome, print_round,
};
use crate::random::RandomSource;
use crate::wordlists::WordProvider;
use anyhow::Result;
use std::io::{self, Write};

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleCommand {
    Quit,
    NewGame,
    Hint,
    Guess(char),
    Unknown,
}

impl SimpleCommand {
    /// Parse a trimmed input line
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let lower = input.trim().to_lowercase();
        match lower.as_str() {
            "quit" | "exit" => Self::Quit,
            "new" => Self::NewGame,
            "?" | "hint" => Self::Hint,
            _ => {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Guess(c),
                    _ => Self::Unknown,
                }
            }
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input fails or the word pool is empty.
pub fn run_simple<P: WordProvider, R: RandomSource>(provider: P, rng: R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Hangman - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the word one letter at a time. Six wrong guesses and you lose.");
    println!("Commands: a letter to guess, '?' or 'hint' for a hint,");
    println!("          'new' for a new game, 'quit' to exit\n");

    let mut controller = RoundController::new(provider, rng, print_notification)?;

    loop {
        print_round(&controller.view());

        match SimpleCommand::parse(&get_user_input("Your guess")?) {
            SimpleCommand::Quit => break,
            SimpleCommand::NewGame => {
                controller.new_game()?;
                println!("\n🔄 New game started!");
                continue;
            }
            SimpleCommand::Hint => {
                if let Some(tier) = controller.use_hint() {
                    print_hint_applied(tier);
                }
            }
            SimpleCommand::Guess(c) => match controller.guess(c) {
                Ok(Some(feedback)) => print_guess_feedback(&feedback),
                Ok(None) => println!("Already tried that one"),
                Err(GameError::InvalidLetter { .. }) => {
                    println!("❌ Please enter a letter A-Z");
                }
                Err(err) => return Err(err.into()),
            },
            SimpleCommand::Unknown => {
                println!("❌ Enter a single letter, '?', 'new' or 'quit'");
                continue;
            }
        }

        let view = controller.view();
        if view.outcome.is_terminal() {
            print_round(&view);
            print_outcome(&view);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" | "new" => {
                    controller.new_game()?;
                    println!("\n🔄 New game started!");
                }
                _ => break,
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt
///
/// End of input reads as `quit`.
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
