//! Display functions for rounds and command results

use super::formatters::{
    LetterStatus, attempts_bar, create_progress_bar, gallows, hint_button_label, letter_rows,
    outcome_banner, spaced_mask,
};
use crate::commands::SimulationStats;
use crate::game::{GuessFeedback, HintTier, MAX_ATTEMPTS, Outcome, RoundView};
use colored::Colorize;

/// Print the board, masked word, attempts and hint state
pub fn print_round(view: &RoundView) {
    println!("\n{}", "─".repeat(60).cyan());

    let attempts_used = MAX_ATTEMPTS - view.remaining_attempts.min(MAX_ATTEMPTS);
    for line in gallows(attempts_used) {
        println!("   {}", line.bright_black());
    }

    println!(
        "\n   Word:      {}",
        spaced_mask(&view.revealed_mask).bright_yellow().bold()
    );
    println!(
        "   Attempts:  [{}] {}",
        attempts_bar(view.remaining_attempts).green(),
        view.remaining_attempts
    );
    println!(
        "   Hint:      {} ({} used)",
        hint_button_label(view.next_hint).bright_cyan(),
        view.hint_usage_count
    );

    println!("\n   Letters:");
    for row in letter_rows(view) {
        let cells: Vec<String> = row
            .iter()
            .map(|&(letter, status)| {
                let text = letter.to_string();
                match status {
                    LetterStatus::Available => text.bright_white().bold().to_string(),
                    LetterStatus::Hit => text.green().bold().to_string(),
                    LetterStatus::Miss => text.red().strikethrough().to_string(),
                    LetterStatus::Disabled => text.bright_black().to_string(),
                }
            })
            .collect();
        println!("     {}", cells.join(" "));
    }
    println!("{}", "─".repeat(60).cyan());
}

/// Print what an accepted guess did
pub fn print_guess_feedback(feedback: &GuessFeedback) {
    match feedback {
        GuessFeedback::Hit { letter, positions } => {
            let times = if positions.len() == 1 { "once" } else { "times" };
            let count = if positions.len() == 1 {
                String::new()
            } else {
                format!("{} ", positions.len())
            };
            println!(
                "{}",
                format!("✅ {letter} appears {count}{times}").green().bold()
            );
        }
        GuessFeedback::Miss { letter } => {
            println!("{}", format!("❌ No {letter} in the word").red());
        }
    }
}

/// Print a notification from the round controller
pub fn print_notification(message: &str) {
    println!("💡 {}", message.bright_yellow());
}

/// Print the effect of an applied hint tier
pub fn print_hint_applied(tier: HintTier) {
    match tier {
        // The controller's notification already covers the free hint
        HintTier::Secret => {}
        HintTier::DisableHalfWrong => {
            println!("{}", "🔒 Half of the wrong letters are now disabled".cyan());
        }
        HintTier::RevealVowels => {
            println!("{}", "🔤 Vowels revealed".cyan());
        }
    }
}

/// Print the result banner and the secret for a finished round
pub fn print_outcome(view: &RoundView) {
    let Some(banner) = outcome_banner(view.outcome) else {
        return;
    };

    println!("\n{}", "═".repeat(60).bright_cyan());
    let banner = match view.outcome {
        Outcome::Won => format!("    🎉  {banner}  🎉").bright_green().bold(),
        _ => format!("    💀  {banner}").bright_red().bold(),
    };
    println!("{banner}");
    if let Some(secret) = &view.revealed_secret {
        println!("    The word was {}", secret.bright_yellow().bold());
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print the result of a simulation run
pub fn print_simulation_stats(stats: &SimulationStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let rate = stats.win_rate();
    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games);
    println!(
        "   Win rate:         [{}] {}",
        create_progress_bar(rate, 1.0, 30).green(),
        format!("{:.1}%", rate * 100.0).bright_yellow().bold()
    );
    println!(
        "   Won / Lost:       {} / {}",
        stats.wins.to_string().green(),
        stats.losses.to_string().red()
    );
    if stats.unfinished > 0 {
        println!(
            "   Unfinished:       {}",
            stats.unfinished.to_string().yellow()
        );
    }
    println!("   Avg guesses:      {:.2}", stats.average_guesses);
    println!(
        "   Avg attempts left on win: {:.2}",
        stats.average_remaining_on_win
    );
    println!("   Hints used:       {}", stats.hints_used);
    println!("   Vowel windfalls:  {}", stats.windfall_wins);
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    println!("\n📈 {}", "Per word:".bright_cyan().bold());
    for (word, tally) in &stats.per_word {
        let pct = if tally.played > 0 {
            tally.won as f64 / tally.played as f64 * 100.0
        } else {
            0.0
        };
        println!(
            "   {:<12} {:>5} played  {:>5} won ({pct:5.1}%)",
            word.bright_white(),
            tally.played,
            tally.won
        );
    }
}
