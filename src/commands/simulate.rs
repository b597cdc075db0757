//! Simulation command
//!
//! Plays many independent rounds with an automated player and aggregates the
//! results. Rounds run in parallel; each one owns its own seeded randomness, so
//! a given seed always reproduces the same statistics.

use crate::core::Word;
use crate::game::{GameError, Outcome, RoundController, TracingSink};
use crate::player::{PlayerKind, RoundRecord, play_round};
use crate::random::SeededRandom;
use crate::wordlists::PoolProvider;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    pub seed: u64,
    /// Player name, see [`PlayerKind::from_name`]
    pub player: String,
    pub use_hints: bool,
}

impl SimulationConfig {
    #[must_use]
    pub fn new(games: usize, seed: u64) -> Self {
        Self {
            games,
            seed,
            player: "frequency".to_string(),
            use_hints: false,
        }
    }
}

/// Per-word tallies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordStats {
    pub played: usize,
    pub won: usize,
}

/// Aggregated results of a simulation run
#[derive(Debug, Clone)]
pub struct SimulationStats {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Rounds the player abandoned before a result
    pub unfinished: usize,
    pub hints_used: usize,
    /// Wins delivered by the vowel-reveal hint
    pub windfall_wins: usize,
    pub average_guesses: f64,
    pub average_remaining_on_win: f64,
    pub per_word: BTreeMap<String, WordStats>,
    pub duration: Duration,
}

impl SimulationStats {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Run `config.games` rounds over `pool`
///
/// # Errors
///
/// Returns [`GameError::EmptyWordPool`] if `pool` is empty.
pub fn run_simulation(
    config: &SimulationConfig,
    pool: &[Word],
) -> Result<SimulationStats, GameError> {
    if pool.is_empty() {
        return Err(GameError::EmptyWordPool);
    }

    let pb = ProgressBar::new(config.games as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let records = (0..config.games)
        .into_par_iter()
        .map(|index| {
            let record = simulate_game(config, pool, index);
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;
    pb.finish_with_message("Complete!");

    let stats = summarize(&records, start.elapsed());
    info!(
        games = stats.games,
        wins = stats.wins,
        seed = config.seed,
        "simulation finished"
    );
    Ok(stats)
}

/// Play one round with randomness derived from the base seed and game index
fn simulate_game(
    config: &SimulationConfig,
    pool: &[Word],
    index: usize,
) -> Result<RoundRecord, GameError> {
    let base = config.seed.wrapping_add((index as u64).wrapping_mul(3));

    let provider = PoolProvider::new(pool.to_vec(), SeededRandom::new(base));
    let mut controller = RoundController::new(
        provider,
        SeededRandom::new(base.wrapping_add(1)),
        TracingSink,
    )?;
    let mut player = PlayerKind::from_name(&config.player, config.use_hints, base.wrapping_add(2));

    Ok(play_round(&mut controller, &mut player))
}

fn summarize(records: &[RoundRecord], duration: Duration) -> SimulationStats {
    let mut per_word: BTreeMap<String, WordStats> = BTreeMap::new();
    let mut wins = 0;
    let mut losses = 0;
    let mut remaining_on_win = 0usize;

    for record in records {
        let entry = per_word.entry(record.secret.clone()).or_default();
        entry.played += 1;
        match record.outcome {
            Outcome::Won => {
                wins += 1;
                entry.won += 1;
                remaining_on_win += usize::from(record.remaining_attempts);
            }
            Outcome::Lost => losses += 1,
            Outcome::InProgress => {}
        }
    }

    let games = records.len();
    let total_guesses: usize = records.iter().map(|r| r.guesses).sum();

    SimulationStats {
        games,
        wins,
        losses,
        unfinished: games - wins - losses,
        hints_used: records.iter().map(|r| usize::from(r.hints_used)).sum(),
        windfall_wins: records.iter().filter(|r| r.windfall).count(),
        average_guesses: if games > 0 {
            total_guesses as f64 / games as f64
        } else {
            0.0
        },
        average_remaining_on_win: if wins > 0 {
            remaining_on_win as f64 / wins as f64
        } else {
            0.0
        },
        per_word,
        duration,
    }
}
