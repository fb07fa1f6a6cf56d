//! Turn state machine for a single game
//!
//! A `GameState` owns the secret target and tracks guesses, the letters
//! confirmed absent, and the win/loss status across up to `max_attempts`
//! turns. It does no I/O; the play loop drives it.

use crate::core::{LetterScore, Score, ScoreError, Word, score_guess};
use std::collections::BTreeSet;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Attempts remain and the target has not been guessed
    InProgress,
    /// A guess matched the target exactly (terminal)
    Won,
    /// All attempts used without a win (terminal)
    Lost,
}

impl GameStatus {
    /// Whether the game has ended
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// State of one game: target, guesses so far, absent letters, and status
///
/// Created per game and discarded on replay; nothing carries over between
/// games except externally written history.
#[derive(Debug, Clone)]
pub struct GameState {
    target: Word,
    guesses: Vec<Word>,
    absent_letters: BTreeSet<u8>,
    status: GameStatus,
    max_attempts: usize,
}

impl GameState {
    /// Start a new game for the given target
    #[must_use]
    pub const fn new(target: Word, max_attempts: usize) -> Self {
        Self {
            target,
            guesses: Vec::new(),
            absent_letters: BTreeSet::new(),
            status: GameStatus::InProgress,
            max_attempts,
        }
    }

    /// Submit a validated guess and advance the game one turn
    ///
    /// The input layer guarantees the guess is a valid word of the right
    /// length before it gets here. Newly confirmed-absent letters are merged
    /// into the absent set, and the status moves to `Won` on an all-exact
    /// score or `Lost` when the attempt limit is reached.
    ///
    /// Submitting to a finished game is a bug in the driving loop, not a
    /// game rule; debug builds assert against it.
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` if the guess length does not
    /// match the target. This is a fatal precondition violation.
    pub fn submit(&mut self, guess: Word) -> Result<Score, ScoreError> {
        debug_assert!(
            self.status == GameStatus::InProgress,
            "guess submitted to a finished game"
        );

        let (score, missed) = score_guess(&guess, &self.target)?;

        // A missed letter is only confirmed absent when no other occurrence
        // of it in this guess earned credit; a starved duplicate (e.g. the
        // last 'e' of "melee" against "erect") is still in the target.
        for &letter in &missed {
            let credited = guess
                .bytes()
                .iter()
                .zip(score.outcomes())
                .any(|(&g, &outcome)| g == letter && outcome != LetterScore::Miss);
            if !credited {
                self.absent_letters.insert(letter);
            }
        }

        self.guesses.push(guess);

        if score.is_all_exact() {
            self.status = GameStatus::Won;
        } else if self.guesses.len() >= self.max_attempts {
            self.status = GameStatus::Lost;
        }

        Ok(score)
    }

    /// Current status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The secret target word
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Guesses made so far, in order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Number of attempts used
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }

    /// Attempts left before the game is lost
    #[inline]
    #[must_use]
    pub fn tries_remaining(&self) -> usize {
        self.max_attempts - self.guesses.len()
    }

    /// Letters confirmed absent from the target, in sorted order
    pub fn absent_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.absent_letters.iter().map(|&letter| letter as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text, 5).unwrap()
    }

    fn game(target: &str) -> GameState {
        GameState::new(word(target), 6)
    }

    #[test]
    fn new_game_is_in_progress() {
        let state = game("crane");
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.attempts(), 0);
        assert_eq!(state.tries_remaining(), 6);
        assert!(state.guesses().is_empty());
        assert_eq!(state.absent_letters().count(), 0);
    }

    #[test]
    fn correct_guess_wins() {
        let mut state = game("crane");
        let score = state.submit(word("crane")).unwrap();

        assert!(score.is_all_exact());
        assert_eq!(state.status(), GameStatus::Won);
        assert!(state.status().is_terminal());
        assert_eq!(state.attempts(), 1);
    }

    #[test]
    fn win_on_the_last_attempt() {
        let mut state = game("crane");
        for _ in 0..5 {
            state.submit(word("slate")).unwrap();
        }
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.tries_remaining(), 1);

        state.submit(word("crane")).unwrap();
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut state = game("crane");
        for attempt in 1..=6 {
            assert_eq!(state.status(), GameStatus::InProgress);
            state.submit(word("slate")).unwrap();
            assert_eq!(state.attempts(), attempt);
        }
        assert_eq!(state.status(), GameStatus::Lost);
        assert!(state.status().is_terminal());
        assert_eq!(state.tries_remaining(), 0);
    }

    #[test]
    fn tries_remaining_counts_down() {
        let mut state = game("crane");
        state.submit(word("slate")).unwrap();
        assert_eq!(state.tries_remaining(), 5);
        state.submit(word("audio")).unwrap();
        assert_eq!(state.tries_remaining(), 4);
    }

    #[test]
    fn guess_history_keeps_order() {
        let mut state = game("crane");
        state.submit(word("slate")).unwrap();
        state.submit(word("audio")).unwrap();

        let texts: Vec<&str> = state.guesses().iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "audio"]);
    }

    #[test]
    fn absent_letters_accumulate_across_attempts() {
        let mut state = game("crane");
        state.submit(word("moist")).unwrap(); // m, o, i, s, t all absent
        let after_first: String = state.absent_letters().collect();
        assert_eq!(after_first, "imost");

        state.submit(word("lumpy")).unwrap(); // adds l, u, p, y
        let after_second: String = state.absent_letters().collect();
        assert_eq!(after_second, "ilmopstuy");
    }

    #[test]
    fn absent_letters_are_deduplicated() {
        let mut state = game("crane");
        state.submit(word("moist")).unwrap();
        state.submit(word("moist")).unwrap();
        assert_eq!(state.absent_letters().count(), 5);
    }

    #[test]
    fn absent_letters_never_include_present_letters() {
        // The last 'e' of "melee" misses against "erect" only because the
        // target's two e's were consumed; 'e' must not be marked absent.
        let mut state = game("erect");
        state.submit(word("melee")).unwrap();

        let absent: String = state.absent_letters().collect();
        assert_eq!(absent, "lm");
    }

    #[test]
    fn absent_letters_skip_credited_duplicates_with_exact() {
        // In "gauge" vs "range" the first 'g' misses but the second is
        // exact, so 'g' stays off the absent list while 'u' goes on.
        let mut state = game("range");
        state.submit(word("gauge")).unwrap();

        let absent: String = state.absent_letters().collect();
        assert_eq!(absent, "u");
    }

    #[test]
    fn length_mismatch_propagates() {
        let mut state = game("crane");
        let result = state.submit(Word::new("abc", 3).unwrap());
        assert!(matches!(
            result,
            Err(ScoreError::LengthMismatch {
                guess: 3,
                target: 5
            })
        ));
    }

    #[test]
    fn custom_attempt_limit_is_honored() {
        let mut state = GameState::new(word("crane"), 2);
        state.submit(word("slate")).unwrap();
        assert_eq!(state.status(), GameStatus::InProgress);
        state.submit(word("slate")).unwrap();
        assert_eq!(state.status(), GameStatus::Lost);
    }
}
