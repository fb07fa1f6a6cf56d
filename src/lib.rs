//! Guess My Word
//!
//! An interactive Wordle-style guessing game: six attempts to find a random
//! five-letter word, with per-letter feedback after each guess. The scorer
//! handles Wordle's duplicate-letter rules exactly.
//!
//! # Quick Start
//!
//! ```rust
//! use guess_my_word::core::{Word, score_guess};
//! use guess_my_word::game::{GameState, GameStatus};
//!
//! let target = Word::new("crane", 5).unwrap();
//! let mut game = GameState::new(target, 6);
//!
//! let guess = Word::new("crane", 5).unwrap();
//! let score = game.submit(guess).unwrap();
//! assert!(score.is_all_exact());
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Turn state machine
pub mod game;

// Word lists and the word bank
pub mod wordlists;

// History and leaderboard sinks
pub mod history;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Game rule configuration
pub mod config;
