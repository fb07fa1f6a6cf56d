//! Formatting utilities for terminal output

use crate::core::{Score, Word};

/// Format a scored guess as two aligned lines
///
/// Uppercased letters over one symbol per position: `+` exact, `?`
/// misplaced, `-` miss.
///
/// # Examples
/// ```
/// use guess_my_word::core::{Word, score_guess};
/// use guess_my_word::output::format_score;
///
/// let guess = Word::new("hello", 5).unwrap();
/// let target = Word::new("humor", 5).unwrap();
/// let (score, _) = score_guess(&guess, &target).unwrap();
///
/// assert_eq!(format_score(&guess, &score), "H E L L O\n+ - - - ?");
/// ```
#[must_use]
pub fn format_score(guess: &Word, score: &Score) -> String {
    let letters: Vec<String> = guess
        .text()
        .chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect();
    let symbols: Vec<String> = score
        .outcomes()
        .iter()
        .map(|outcome| outcome.symbol().to_string())
        .collect();

    format!("{}\n{}", letters.join(" "), symbols.join(" "))
}

/// Join letters with commas for the absent-letter report
///
/// The caller supplies letters already sorted (the absent set is ordered).
#[must_use]
pub fn format_absent_letters(letters: impl Iterator<Item = char>) -> String {
    letters
        .map(String::from)
        .collect::<Vec<_>>()
        .join(", ")
}
