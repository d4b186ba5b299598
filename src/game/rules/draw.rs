//! Full-board detection.

use crate::game::types::{Board, Cell};
use tracing::instrument;

/// Checks whether every cell on the board is occupied.
///
/// A full board with no winning streak ends the game in a draw. The scan
/// covers all `rows x cols` cells, so rectangular boards are checked
/// completely.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| *cell != Cell::Empty)
}
