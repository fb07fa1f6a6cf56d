//! Game rule configuration
//!
//! Word length and attempt limit are injected into the state machine and
//! word bank at construction time rather than read from globals, so tests
//! can run the game deterministically with other values.

/// Rules for one game: word length and attempt limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word
    pub word_length: usize,
    /// Guesses allowed before the game is lost
    pub max_attempts: usize,
}

impl GameConfig {
    /// Create a configuration with explicit values
    #[must_use]
    pub const fn new(word_length: usize, max_attempts: usize) -> Self {
        Self {
            word_length,
            max_attempts,
        }
    }
}

impl Default for GameConfig {
    /// The canonical rules: five-letter words, six attempts
    fn default() -> Self {
        Self::new(5, 6)
    }
}
