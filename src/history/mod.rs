//! Append-only history and leaderboard sinks
//!
//! Each completed game appends a dated record of its guesses to the guess
//! history file and an outcome line to the leaderboard; each game start
//! appends the drawn target to the target history. Every record is written
//! with a single `write_all` call so a failure never leaves a torn line.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use time::OffsetDateTime;
use time::macros::format_description;

/// File name for the per-game target log
pub const TARGET_HISTORY_FILE: &str = "target_word_history.txt";
/// File name for the per-game guess list log
pub const GUESS_HISTORY_FILE: &str = "guess_history.txt";
/// File name for the leaderboard
pub const LEADERBOARD_FILE: &str = "leaderboard.txt";

/// Everything recorded about one finished game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub target: String,
    pub guesses: Vec<String>,
    pub attempts: usize,
    pub won: bool,
    pub cheat_mode: bool,
    pub player: String,
}

/// Appends game records under a configurable directory
#[derive(Debug, Clone)]
pub struct HistoryWriter {
    dir: PathBuf,
}

impl HistoryWriter {
    /// Create a writer rooted at `dir` (created on first append)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Record the target word drawn for a new game
    ///
    /// # Errors
    /// Returns an I/O error if the directory or file cannot be written.
    pub fn append_target(&self, target: &str) -> io::Result<()> {
        self.append_line(TARGET_HISTORY_FILE, &format!("{}: {target}", today()))
    }

    /// Record a finished game's guesses and its leaderboard line
    ///
    /// # Errors
    /// Returns an I/O error if the directory or files cannot be written.
    pub fn append_game(&self, record: &GameRecord) -> io::Result<()> {
        let date = today();
        self.append_line(GUESS_HISTORY_FILE, &guess_history_line(record, &date))?;
        self.append_line(LEADERBOARD_FILE, &leaderboard_line(record, &date))
    }

    fn append_line(&self, file_name: &str, line: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.dir.join(file_name))?;

        // One write per record keeps appends atomic from the game's side
        file.write_all(format!("{line}\n").as_bytes())
    }
}

/// Today's date as `YYYY-MM-DD`
fn today() -> String {
    let format = format_description!("[year]-[month]-[day]");
    OffsetDateTime::now_utc()
        .date()
        .format(&format)
        .unwrap_or_else(|_| String::from("unknown-date"))
}

fn guess_history_line(record: &GameRecord, date: &str) -> String {
    format!("{date}: [{}]", record.guesses.join(", "))
}

fn leaderboard_line(record: &GameRecord, date: &str) -> String {
    let target = record.target.to_uppercase();
    let guesses = record.guesses.join(", ");
    if record.won {
        format!(
            "({date}) {} guessed '{target}' after {} tries. Guesses: [{guesses}] Cheat mode: {}",
            record.player, record.attempts, record.cheat_mode
        )
    } else {
        format!(
            "({date}) {} failed to guess '{target}'. Guesses: [{guesses}] Cheat mode: {}",
            record.player, record.cheat_mode
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(won: bool) -> GameRecord {
        GameRecord {
            target: "crane".to_string(),
            guesses: vec!["slate".to_string(), "crane".to_string()],
            attempts: 2,
            won,
            cheat_mode: false,
            player: "jess".to_string(),
        }
    }

    #[test]
    fn guess_history_line_format() {
        let line = guess_history_line(&record(true), "2022-03-14");
        assert_eq!(line, "2022-03-14: [slate, crane]");
    }

    #[test]
    fn leaderboard_line_for_a_win() {
        let line = leaderboard_line(&record(true), "2022-03-14");
        assert_eq!(
            line,
            "(2022-03-14) jess guessed 'CRANE' after 2 tries. \
             Guesses: [slate, crane] Cheat mode: false"
        );
    }

    #[test]
    fn leaderboard_line_for_a_loss() {
        let mut lost = record(false);
        lost.guesses = vec!["slate".to_string(); 6];
        lost.attempts = 6;
        lost.cheat_mode = true;

        let line = leaderboard_line(&lost, "2022-03-14");
        assert!(line.starts_with("(2022-03-14) jess failed to guess 'CRANE'."));
        assert!(line.ends_with("Cheat mode: true"));
    }

    #[test]
    fn today_is_iso_formatted() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[4], b'-');
        assert_eq!(date.as_bytes()[7], b'-');
    }

    #[test]
    fn writer_appends_records() {
        let dir = std::env::temp_dir().join(format!("guess_my_word_test_{}", std::process::id()));
        let writer = HistoryWriter::new(&dir);

        writer.append_target("crane").unwrap();
        writer.append_game(&record(true)).unwrap();

        let targets = fs::read_to_string(dir.join(TARGET_HISTORY_FILE)).unwrap();
        assert!(targets.trim_end().ends_with(": crane"));

        let leaderboard = fs::read_to_string(dir.join(LEADERBOARD_FILE)).unwrap();
        assert!(leaderboard.contains("jess guessed 'CRANE' after 2 tries."));

        fs::remove_dir_all(&dir).unwrap();
    }
}
