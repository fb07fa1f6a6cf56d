//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of the given length from a file, one word per line
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// entries that fail validation.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use guess_my_word::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/target_words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed, word_length).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use guess_my_word::wordlists::loader::words_from_slice;
/// use guess_my_word::wordlists::TARGETS;
///
/// let words = words_from_slice(TARGETS, 5);
/// assert_eq!(words.len(), TARGETS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], word_length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&text| Word::new(text, word_length).ok())
        .collect()
}
