//! Word lists and the word bank
//!
//! Provides embedded word lists compiled into the binary, a file loader for
//! custom lists, and the `WordBank` the game draws from.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{EmptyWordPool, WordBank};
pub use embedded::{TARGETS, TARGETS_COUNT, VALID, VALID_COUNT};
