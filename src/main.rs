//! Guess My Word - CLI
//!
//! Interactive Wordle-style guessing game for the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use guess_my_word::{
    commands::{PlayOptions, run_play, run_rules},
    config::GameConfig,
    history::HistoryWriter,
    wordlists::{TARGETS, VALID, WordBank, loader},
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(
    name = "guess_my_word",
    about = "Guess the secret five-letter word in six tries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Reveal the target word at the start of each game
    #[arg(long, global = true)]
    cheat: bool,

    /// Fix the target word instead of drawing one at random
    #[arg(long, global = true)]
    target: Option<String>,

    /// Seed the random target draw for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Path to a custom valid-guess word list (one word per line)
    #[arg(long, global = true)]
    words: Option<String>,

    /// Path to a custom target-word list (one word per line)
    #[arg(long, global = true)]
    targets: Option<String>,

    /// Directory for the history and leaderboard files
    #[arg(long, global = true, default_value = "word-bank")]
    history_dir: String,

    /// Player name for the leaderboard (skips the prompt)
    #[arg(long, global = true)]
    player: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game (default)
    Play,

    /// Show how to play, then start a game
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig::default();
    let bank = load_word_bank(&cli, config)?;
    let history = HistoryWriter::new(&cli.history_dir);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let options = PlayOptions {
        cheat_mode: cli.cheat,
        fixed_target: cli.target.clone(),
        player: cli.player.clone(),
    };

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&bank, config, &options, &mut rng, &history),
        Commands::Rules => run_rules(&bank, config, &options, &mut rng, &history),
    }
}

/// Build the word bank from the embedded lists or the --words/--targets overrides
fn load_word_bank(cli: &Cli, config: GameConfig) -> Result<WordBank> {
    let valid = match &cli.words {
        Some(path) => loader::load_from_file(path, config.word_length)
            .with_context(|| format!("Failed to load valid words from {path}"))?,
        None => loader::words_from_slice(VALID, config.word_length),
    };

    let targets = match &cli.targets {
        Some(path) => loader::load_from_file(path, config.word_length)
            .with_context(|| format!("Failed to load target words from {path}"))?,
        None => loader::words_from_slice(TARGETS, config.word_length),
    };

    Ok(WordBank::new(valid, targets))
}
