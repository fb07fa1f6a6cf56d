//! Game turn state machine

mod state;

pub use state::{GameState, GameStatus};
