//! Gridstreak - generalized tic-tac-toe for the terminal.
//!
//! Two players share one terminal and alternate turns on a board of
//! configurable size, racing to line up a configurable number of symbols
//! in a row, column, or diagonal.
//!
//! # Architecture
//!
//! - **Game**: the state model and win detection - board, configuration,
//!   turn tracking, and the directional streak scan. No I/O.
//! - **Session**: the orchestrator sequencing setup prompts, turns, and
//!   the new-game loop, speaking to the game through its operations and to
//!   the user through the [`Presentation`] trait.
//! - **View**: the line-oriented console implementation of
//!   [`Presentation`].
//!
//! # Example
//!
//! ```no_run
//! use gridstreak::{ConsoleView, SessionOrchestrator};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut session = SessionOrchestrator::new(ConsoleView::stdio());
//! session.run(None)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod game;
mod session;
mod view;

pub use cli::Cli;
pub use game::{
    Board, Cell, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WIN_LENGTH, GameState, Player, Symbols,
};
pub use session::{GamePreset, SessionOrchestrator};
pub use view::{ConsoleView, Presentation};
