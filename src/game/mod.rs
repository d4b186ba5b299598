//! Game-state model and win detection.

mod rules;
mod state;
mod types;

pub use state::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WIN_LENGTH, GameState};
pub use types::{Board, Cell, Player, Symbols};
