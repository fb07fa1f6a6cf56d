//! Banner and message printing for the interactive game

use crate::config::GameConfig;
use colored::Colorize;

/// Print the welcome banner shown at the start of every game
pub fn print_welcome(config: &GameConfig) {
    let rule = "─".repeat(70);
    println!("\n{}", rule.bright_cyan());
    println!("{}", "Welcome to Guess My Word!".bright_yellow().bold());
    println!(
        "The aim is to guess the randomly selected word; you have {} tries \
         to guess the {}-letter word.",
        config.max_attempts, config.word_length
    );
    println!("{}", rule.bright_cyan());
}

/// Print the how-to-play screen
pub fn print_rules(config: &GameConfig) {
    let rule = "─".repeat(70);
    println!("\n{}", rule.bright_cyan());
    println!("{}", "HOW TO PLAY".bright_yellow().bold());
    println!("{}", rule.bright_cyan());
    println!(
        "\nGuess the randomly generated word in {} tries.",
        config.max_attempts
    );
    println!(
        "Each guess must be a valid {}-letter word. Hit enter to submit.",
        config.word_length
    );
    println!("After each guess, a row of symbols shows how close you were:\n");
    println!("  {}  the letter is in the correct position", "+".green());
    println!(
        "  {}  the letter appears in the word but in the wrong position",
        "?".yellow()
    );
    println!("  {}  the letter does not appear in the word", "-".dimmed());
    println!("\nAn example where the target word is HUMOR and your guess was HELLO:\n");
    println!("  H E L L O");
    println!("  + - - - ?");
}

/// Print the win message
pub fn print_win(target: &str, attempts: usize) {
    println!(
        "\n{}",
        format!(
            "You guessed {} correctly after {attempts} {}!",
            target,
            if attempts == 1 { "try" } else { "tries" }
        )
        .green()
        .bold()
    );
}

/// Print the loss message
pub fn print_loss(target: &str) {
    println!("\n{}", "Game over, you ran out of tries".red().bold());
    println!("The word was: {}", target.to_uppercase().bright_yellow());
}
