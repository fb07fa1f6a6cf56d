//! Terminal output formatting

pub mod display;
mod formatters;

pub use formatters::{format_absent_letters, format_score};
