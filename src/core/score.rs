//! Guess scoring
//!
//! Scores a guess against the target word with Wordle's duplicate-letter
//! rules: an exact match consumes that occurrence of the letter, and a
//! misplaced credit is only given while unconsumed occurrences remain.

use super::Word;

/// The outcome of a single guessed letter
///
/// The derived order (`Miss < Misplaced < Exact`) exists for display
/// purposes only and never drives scoring decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterScore {
    /// Letter does not correspond to any remaining occurrence in the target
    Miss,
    /// Letter is in the target but at a different position
    Misplaced,
    /// Letter matches the target at this position
    Exact,
}

impl LetterScore {
    /// The terminal symbol for this outcome: `-`, `?`, or `+`
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Miss => '-',
            Self::Misplaced => '?',
            Self::Exact => '+',
        }
    }
}

/// Per-position outcomes for one guess, in guess order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score(Vec<LetterScore>);

impl Score {
    /// The outcome for each position
    #[inline]
    #[must_use]
    pub fn outcomes(&self) -> &[LetterScore] {
        &self.0
    }

    /// Whether every position matched exactly (a winning guess)
    ///
    /// # Examples
    /// ```
    /// use guess_my_word::core::{Word, score_guess};
    ///
    /// let hello = Word::new("hello", 5).unwrap();
    /// let (score, _) = score_guess(&hello, &hello).unwrap();
    /// assert!(score.is_all_exact());
    /// ```
    #[must_use]
    pub fn is_all_exact(&self) -> bool {
        self.0.iter().all(|&outcome| outcome == LetterScore::Exact)
    }

    /// Number of scored positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the score covers no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Error type for scoring precondition violations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// Guess and target lengths differ; the input layer should make this
    /// impossible, so it is fatal rather than recoverable.
    LengthMismatch { guess: usize, target: usize },
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { guess, target } => write!(
                f,
                "Guess length {guess} does not match target length {target}"
            ),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Score a guess against the target word
///
/// Returns the per-position outcomes plus the letters that missed, in guess
/// order with duplicates preserved. Deduplicating missed letters is the
/// caller's job (see `GameState`).
///
/// # Algorithm
/// Two passes over a remaining-letter multiset of the target:
/// 1. Exact pass: mark exact matches and consume those occurrences.
/// 2. Misplaced pass, left to right: a letter with an unconsumed occurrence
///    remaining is `Misplaced` and consumes it; otherwise it is a `Miss`.
///
/// The left-to-right order of the second pass is load-bearing: when the
/// guess repeats a letter more times than the target has unconsumed, the
/// leftmost occurrences get the `Misplaced` credit and the excess on the
/// right miss.
///
/// # Errors
/// Returns `ScoreError::LengthMismatch` if the guess and target lengths
/// differ.
///
/// # Examples
/// ```
/// use guess_my_word::core::{LetterScore, Word, score_guess};
///
/// let guess = Word::new("train", 5).unwrap();
/// let target = Word::new("tenor", 5).unwrap();
/// let (score, missed) = score_guess(&guess, &target).unwrap();
///
/// assert_eq!(
///     score.outcomes(),
///     &[
///         LetterScore::Exact,
///         LetterScore::Misplaced,
///         LetterScore::Miss,
///         LetterScore::Miss,
///         LetterScore::Misplaced,
///     ]
/// );
/// assert_eq!(missed, b"ai");
/// ```
pub fn score_guess(guess: &Word, target: &Word) -> Result<(Score, Vec<u8>), ScoreError> {
    if guess.len() != target.len() {
        return Err(ScoreError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let guess_bytes = guess.bytes();
    let target_bytes = target.bytes();
    let mut outcomes = vec![LetterScore::Miss; guess.len()];
    let mut remaining = target.letter_counts();

    // First pass: exact matches consume their target occurrence
    for (i, &letter) in guess_bytes.iter().enumerate() {
        if letter == target_bytes[i] {
            outcomes[i] = LetterScore::Exact;
            if let Some(count) = remaining.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass, left to right: misplaced credit while occurrences remain
    let mut missed = Vec::new();
    for (i, &letter) in guess_bytes.iter().enumerate() {
        if outcomes[i] == LetterScore::Exact {
            continue;
        }
        match remaining.get_mut(&letter) {
            Some(count) if *count > 0 => {
                outcomes[i] = LetterScore::Misplaced;
                *count -= 1;
            }
            _ => missed.push(letter),
        }
    }

    Ok((Score(outcomes), missed))
}
