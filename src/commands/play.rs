//! Interactive game loop
//!
//! Drives the full game from the terminal: draw a target, prompt for guesses
//! until the game ends, record the outcome, and offer a replay. All console
//! I/O lives here; the scorer and state machine stay pure.

use crate::config::GameConfig;
use crate::core::Word;
use crate::game::{GameState, GameStatus};
use crate::history::{GameRecord, HistoryWriter};
use crate::output::{display, format_absent_letters, format_score};
use crate::wordlists::WordBank;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// Per-session options gathered from the command line
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// Reveal the target at the start of each game
    pub cheat_mode: bool,
    /// Fixed target word instead of a random draw
    pub fixed_target: Option<String>,
    /// Leaderboard name; prompted per game when absent
    pub player: Option<String>,
}

/// Print the rules screen, wait until the player is ready, then play
///
/// # Errors
/// Returns an error under the same conditions as [`run_play`].
pub fn run_rules(
    bank: &WordBank,
    config: GameConfig,
    options: &PlayOptions,
    rng: &mut StdRng,
    history: &HistoryWriter,
) -> Result<()> {
    display::print_rules(&config);
    loop {
        println!("\nReady to play? (please enter \"yes\")");
        if read_input("> ")?.to_lowercase() == "yes" {
            return run_play(bank, config, options, rng, history);
        }
    }
}

/// Run games until the player declines a replay
///
/// # Errors
/// Returns an error when the target pool is empty, a fixed target is
/// invalid, console I/O fails, or a history record cannot be appended.
pub fn run_play(
    bank: &WordBank,
    config: GameConfig,
    options: &PlayOptions,
    rng: &mut StdRng,
    history: &HistoryWriter,
) -> Result<()> {
    loop {
        display::print_welcome(&config);

        let target = match &options.fixed_target {
            Some(text) => Word::new(text.as_str(), config.word_length)
                .context("The fixed target word is invalid")?,
            None => bank.draw_target(rng)?,
        };
        history
            .append_target(target.text())
            .context("Failed to record the target word")?;

        if options.cheat_mode {
            println!("{}", target.text().dimmed());
        }

        let mut state = GameState::new(target, config.max_attempts);

        while state.status() == GameStatus::InProgress {
            let guess = prompt_guess(bank, config.word_length)?;
            let score = state.submit(guess.clone())?;

            println!("The result of your guess is:");
            println!("{}", format_score(&guess, &score));

            match state.status() {
                GameStatus::Won => display::print_win(state.target().text(), state.attempts()),
                GameStatus::Lost => display::print_loss(state.target().text()),
                GameStatus::InProgress => {
                    println!("You have {} tries remaining", state.tries_remaining());
                    println!(
                        "The letters that are not in the word are: {}",
                        format_absent_letters(state.absent_letters())
                    );
                }
            }
        }

        let player = match &options.player {
            Some(name) => name.clone(),
            None => prompt_player_name()?,
        };
        let record = GameRecord {
            target: state.target().text().to_string(),
            guesses: state
                .guesses()
                .iter()
                .map(|word| word.text().to_string())
                .collect(),
            attempts: state.attempts(),
            won: state.status() == GameStatus::Won,
            cheat_mode: options.cheat_mode,
            player,
        };
        history
            .append_game(&record)
            .context("Failed to record the finished game")?;

        if !prompt_play_again()? {
            return Ok(());
        }
    }
}

/// Prompt until the player enters a word of the right length that the bank
/// accepts; the state machine never sees an invalid guess
fn prompt_guess(bank: &WordBank, word_length: usize) -> Result<Word> {
    loop {
        println!("Please enter your guess");
        let input = read_input("> ")?.to_lowercase();

        if input.len() != word_length {
            println!("Please enter a guess that is {word_length} letters long");
        } else if !bank.is_valid_guess(&input) {
            println!("Please enter a valid word");
        } else if let Ok(word) = Word::new(input, word_length) {
            return Ok(word);
        } else {
            println!("Please enter a valid word");
        }
    }
}

fn prompt_player_name() -> Result<String> {
    let name = read_input("Please enter your name for the leaderboard: ")?;
    if name.is_empty() {
        Ok(String::from("anonymous"))
    } else {
        Ok(name)
    }
}

fn prompt_play_again() -> Result<bool> {
    println!("Play again?");
    match read_input("(Please enter Y or N): ")?.to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => {
            println!("That wasn't Y or N, play by the rules next time...");
            Ok(false)
        }
    }
}

/// Read one trimmed line from stdin after showing a prompt
fn read_input(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
