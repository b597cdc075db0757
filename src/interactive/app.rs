//! TUI application state and logic

use crate::game::{
    CollectingSink, GameError, GuessFeedback, HintTier, Outcome, RoundController, RoundView,
};
use crate::random::RandomSource;
use crate::wordlists::WordProvider;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept in the log
pub const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App<P, R> {
    pub controller: RoundController<P, R, CollectingSink>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    round_recorded: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session statistics across rounds
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub hints_used: usize,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<P: WordProvider, R: RandomSource> App<P, R> {
    /// Create the app and deal the first word
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyWordPool`] if the provider has no words.
    pub fn new(provider: P, rng: R) -> Result<Self, GameError> {
        let controller = RoundController::new(provider, rng, CollectingSink::new())?;
        let mut app = Self {
            controller,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            round_recorded: false,
        };
        app.add_message(
            "Welcome! Type letters to guess, '?' for a hint.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    #[must_use]
    pub fn view(&self) -> RoundView {
        self.controller.view()
    }

    #[must_use]
    pub fn round_over(&self) -> bool {
        self.controller.current_state().outcome().is_terminal()
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') | KeyCode::Tab => self.request_hint(),
            KeyCode::Enter | KeyCode::F(2) => {
                if self.round_over() {
                    self.new_game();
                }
            }
            KeyCode::Char(c) if c.is_alphabetic() => self.guess(c),
            _ => {}
        }
    }

    /// Guess a letter and log the result
    pub fn guess(&mut self, c: char) {
        match self.controller.guess(c) {
            Ok(Some(GuessFeedback::Hit { letter, positions })) => {
                let text = match positions.len() {
                    1 => format!("{letter} is in the word"),
                    n => format!("{letter} appears {n} times"),
                };
                self.add_message(&text, MessageStyle::Success);
            }
            Ok(Some(GuessFeedback::Miss { letter })) => {
                self.add_message(&format!("No {letter} in the word"), MessageStyle::Error);
            }
            Ok(None) => {}
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
        self.finish_if_over();
    }

    /// Ask the controller for the next hint tier
    pub fn request_hint(&mut self) {
        if self.round_over() {
            return;
        }

        let tier = self.controller.use_hint();
        for note in self.controller.sink_mut().drain() {
            self.add_message(&note, MessageStyle::Info);
        }

        match tier {
            Some(HintTier::DisableHalfWrong) => {
                self.add_message("Half of the wrong letters disabled", MessageStyle::Info);
            }
            Some(HintTier::RevealVowels) => {
                self.add_message("Vowels revealed", MessageStyle::Info);
            }
            Some(HintTier::Secret) | None => {}
        }
        if tier.is_some() {
            self.stats.hints_used += 1;
        }
        self.finish_if_over();
    }

    pub fn new_game(&mut self) {
        match self.controller.new_game() {
            Ok(()) => {
                self.round_recorded = false;
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }

    /// Record the current round in the session stats once it has ended
    fn finish_if_over(&mut self) {
        let view = self.view();
        if !view.outcome.is_terminal() || self.round_recorded {
            return;
        }

        self.round_recorded = true;
        self.stats.total_games += 1;
        let secret = view.revealed_secret.unwrap_or_default();
        match view.outcome {
            Outcome::Won => {
                self.stats.games_won += 1;
                self.add_message(
                    &format!("🎉 You Won! The word was {secret}"),
                    MessageStyle::Success,
                );
            }
            _ => {
                self.add_message(
                    &format!("💀 You Lost! The word was {secret}"),
                    MessageStyle::Error,
                );
            }
        }
        self.add_message("Press Enter for a new game or Esc to quit", MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<P: WordProvider, R: RandomSource>(app: App<P, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, P, R>(terminal: &mut Terminal<B>, mut app: App<P, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    P: WordProvider,
    R: RandomSource,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::{FIRST_HINT_MESSAGE, NO_HINTS_LEFT_MESSAGE};
    use crate::random::ScriptedRandom;
    use crate::wordlists::ScriptedProvider;

    fn new_app(words: &[&str]) -> App<ScriptedProvider, ScriptedRandom> {
        let words = words.iter().map(|w| Word::new(w).unwrap()).collect();
        App::new(ScriptedProvider::new(words), ScriptedRandom::default()).unwrap()
    }

    fn press(app: &mut App<ScriptedProvider, ScriptedRandom>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App<ScriptedProvider, ScriptedRandom>, keys: &str) {
        for c in keys.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn letters_guess_and_log() {
        let mut app = new_app(&["BOSTON"]);
        type_str(&mut app, "oz");

        let view = app.view();
        assert_eq!(view.remaining_attempts, 5);
        let texts: Vec<&str> = app.messages.iter().map(|m| m.text.as_str()).collect();
        assert!(texts.contains(&"O appears 2 times"));
        assert!(texts.contains(&"No Z in the word"));
    }

    #[test]
    fn repeated_letter_is_silent() {
        let mut app = new_app(&["BOSTON"]);
        type_str(&mut app, "b");
        let logged = app.messages.len();
        type_str(&mut app, "b");
        assert_eq!(app.messages.len(), logged);
    }

    #[test]
    fn first_hint_message_is_drained_from_sink() {
        let mut app = new_app(&["BOSTON"]);
        press(&mut app, KeyCode::Char('?'));

        assert_eq!(app.view().hint_usage_count, 1);
        assert_eq!(app.view().remaining_attempts, 6);
        assert_eq!(
            app.messages.last().map(|m| m.text.as_str()),
            Some(FIRST_HINT_MESSAGE)
        );
        assert!(app.controller.sink().messages().is_empty());
    }

    #[test]
    fn tab_walks_through_hint_tiers() {
        let mut app = new_app(&["BOSTON"]);
        for _ in 0..4 {
            press(&mut app, KeyCode::Tab);
        }

        assert_eq!(app.view().hint_usage_count, 3);
        assert_eq!(app.stats.hints_used, 3);
        assert_eq!(
            app.messages.last().map(|m| m.text.as_str()),
            Some(NO_HINTS_LEFT_MESSAGE)
        );
    }

    #[test]
    fn winning_updates_stats_once() {
        let mut app = new_app(&["CAT", "DOG"]);
        type_str(&mut app, "cat");

        assert!(app.round_over());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert!(app.messages.iter().any(|m| m.text.contains("The word was CAT")));

        // Further keys do nothing until a new game
        type_str(&mut app, "xyz");
        assert_eq!(app.stats.total_games, 1);

        press(&mut app, KeyCode::Enter);
        assert!(!app.round_over());
        assert_eq!(app.view().revealed_mask.len(), 3);
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn losing_records_a_game() {
        let mut app = new_app(&["CAT"]);
        type_str(&mut app, "bdefgh");

        assert_eq!(app.view().outcome, Outcome::Lost);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn enter_mid_round_keeps_the_round() {
        let mut app = new_app(&["CAT", "DOG"]);
        type_str(&mut app, "c");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::F(2));
        assert_eq!(app.view().guessed.len(), 1);
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app(&["CAT"]);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        // Ctrl-C is not a guess
        assert!(app.view().guessed.is_empty());

        let mut app = new_app(&["CAT"]);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_capped() {
        let mut app = new_app(&["QUIZ"]);
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MESSAGE_LIMIT);
        assert_eq!(app.messages[0].text, "5");
    }
}
