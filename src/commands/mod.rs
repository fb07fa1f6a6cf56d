//! Command implementations

pub mod play;

pub use play::{PlayOptions, run_play, run_rules};
