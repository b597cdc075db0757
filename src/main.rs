//! Hangman - CLI
//!
//! Hangman with a tiered hint system, playable as a TUI or a line-based game,
//! plus a parallel simulator for automated players.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use hangman_engine::{
    commands::{SimulationConfig, run_simple, run_simulation},
    core::Word,
    output::print_simulation_stats,
    random::AnyRandom,
    wordlists::{DEFAULT_POOL, PoolProvider, load_from_file, words_from_slice},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman with a three-tier hint system",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'default' (built-in pool) or path to a file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "default")]
    wordlist: String,

    /// Seed every random source for reproducible rounds
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// Play many rounds with an automated player and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,

        /// Player: frequency (default) or random
        #[arg(short, long, default_value = "frequency")]
        player: String,

        /// Let the player use hints
        #[arg(long)]
        hints: bool,
    },
}

/// Load the word pool based on the -w flag
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    let words = match wordlist {
        "default" => words_from_slice(&DEFAULT_POOL),
        path => load_from_file(path)?,
    };
    if words.is_empty() {
        bail!("word list '{wordlist}' has no usable words");
    }
    info!(count = words.len(), wordlist, "loaded word pool");
    Ok(words)
}

/// Install the log subscriber; `RUST_LOG` overrides the default `warn` level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let words = load_words(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(words, cli.seed),
        Commands::Simple => run_simple_command(words, cli.seed),
        Commands::Simulate {
            games,
            player,
            hints,
        } => run_simulate_command(&words, cli.seed, games, player, hints),
    }
}

/// Word and hint randomness, derived from one seed when given
fn random_sources(seed: Option<u64>) -> (AnyRandom, AnyRandom) {
    (
        AnyRandom::from_seed(seed),
        AnyRandom::from_seed(seed.map(|s| s.wrapping_add(1))),
    )
}

fn run_play_command(words: Vec<Word>, seed: Option<u64>) -> Result<()> {
    use hangman_engine::interactive::{App, run_tui};

    let (word_rng, hint_rng) = random_sources(seed);
    let app = App::new(PoolProvider::new(words, word_rng), hint_rng)?;
    run_tui(app)
}

fn run_simple_command(words: Vec<Word>, seed: Option<u64>) -> Result<()> {
    let (word_rng, hint_rng) = random_sources(seed);
    run_simple(PoolProvider::new(words, word_rng), hint_rng)
}

fn run_simulate_command(
    words: &[Word],
    seed: Option<u64>,
    games: usize,
    player: String,
    hints: bool,
) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);

    println!(
        "Simulating {games} games with the {player} player (hints {}, seed {seed})...",
        if hints { "on" } else { "off" }
    );

    let mut config = SimulationConfig::new(games, seed);
    config.player = player;
    config.use_hints = hints;

    let stats = run_simulation(&config, words)?;
    print_simulation_stats(&stats);
    Ok(())
}
