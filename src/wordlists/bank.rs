//! Word bank: the valid-guess set and the target pool
//!
//! The bank is the game's word source. It answers guess-membership queries
//! and draws one target per game, either from the embedded lists or from
//! custom files supplied on the command line.

use super::loader::words_from_slice;
use super::{TARGETS, VALID};
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error returned when a target draw is requested from an empty pool
///
/// Fatal for the game; the caller propagates it rather than inventing a
/// default word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyWordPool;

impl fmt::Display for EmptyWordPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The target word pool is empty")
    }
}

impl std::error::Error for EmptyWordPool {}

/// Valid guessable words plus the pool targets are drawn from
#[derive(Debug, Clone)]
pub struct WordBank {
    valid: FxHashSet<String>,
    targets: Vec<Word>,
}

impl WordBank {
    /// Build a bank from explicit word lists
    ///
    /// Every target is automatically accepted as a guess, so a custom
    /// target list never produces an unguessable word.
    #[must_use]
    pub fn new(valid_words: Vec<Word>, targets: Vec<Word>) -> Self {
        let mut valid: FxHashSet<String> = valid_words
            .into_iter()
            .map(|word| word.text().to_string())
            .collect();
        for target in &targets {
            valid.insert(target.text().to_string());
        }

        Self { valid, targets }
    }

    /// Build a bank from the embedded word lists
    ///
    /// Words that do not match `word_length` are filtered out; the embedded
    /// lists are five-letter lists, so non-default lengths need custom files.
    #[must_use]
    pub fn embedded(word_length: usize) -> Self {
        Self::new(
            words_from_slice(VALID, word_length),
            words_from_slice(TARGETS, word_length),
        )
    }

    /// Whether a normalized (lowercase) string is an accepted guess
    #[must_use]
    pub fn is_valid_guess(&self, text: &str) -> bool {
        self.valid.contains(text)
    }

    /// Draw a target word uniformly at random from the pool
    ///
    /// # Errors
    /// Returns `EmptyWordPool` if the pool has no words.
    pub fn draw_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, EmptyWordPool> {
        self.targets.choose(rng).cloned().ok_or(EmptyWordPool)
    }

    /// Number of words in the target pool
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Number of accepted guess words
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|&t| Word::new(t, 5).unwrap()).collect()
    }

    #[test]
    fn bank_membership() {
        let bank = WordBank::new(words(&["crane", "slate"]), words(&["crane"]));

        assert!(bank.is_valid_guess("crane"));
        assert!(bank.is_valid_guess("slate"));
        assert!(!bank.is_valid_guess("zzzzz"));
    }

    #[test]
    fn targets_are_always_guessable() {
        let bank = WordBank::new(words(&["slate"]), words(&["crane"]));
        assert!(bank.is_valid_guess("crane"));
    }

    #[test]
    fn draw_target_comes_from_pool() {
        let bank = WordBank::new(words(&["crane", "slate"]), words(&["crane", "slate"]));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let target = bank.draw_target(&mut rng).unwrap();
            assert!(bank.is_valid_guess(target.text()));
        }
    }

    #[test]
    fn draw_target_is_deterministic_with_a_seed() {
        let bank = WordBank::embedded(5);

        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(
            bank.draw_target(&mut rng1).unwrap(),
            bank.draw_target(&mut rng2).unwrap()
        );
    }

    #[test]
    fn empty_pool_is_an_error() {
        let bank = WordBank::new(words(&["crane"]), Vec::new());
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(bank.draw_target(&mut rng), Err(EmptyWordPool));
    }

    #[test]
    fn embedded_bank_is_populated() {
        let bank = WordBank::embedded(5);
        assert!(bank.target_count() > 0);
        assert!(bank.valid_count() >= bank.target_count());
    }
}
