//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and have clear mathematical properties.

mod score;
mod word;

pub use score::{LetterScore, Score, ScoreError, score_guess};
pub use word::{Word, WordError};
