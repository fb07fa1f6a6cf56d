//! Word representation
//!
//! A `Word` is a validated, lowercase sequence of ASCII letters of a fixed,
//! configured length. Both the secret target word and player guesses use it.

use rustc_hash::FxHashMap;
use std::fmt;

/// A validated lowercase word
///
/// The expected length comes from the game configuration rather than a
/// process-wide constant, so tests and custom word lists can use other sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, got: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, got } => {
                write!(f, "Word must be exactly {expected} letters, got {got}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word of the given length from a string
    ///
    /// Input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length does not match `length`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use guess_my_word::core::Word;
    ///
    /// let word = Word::new("crane", 5).unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long", 5).is_err());
    /// assert!(Word::new("sh0rt", 5).is_err());
    /// ```
    pub fn new(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                got: text.len(),
            });
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the word has no letters (only possible with a zero-length config)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the scorer as the remaining-letter multiset for duplicate handling.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.text.as_bytes() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
