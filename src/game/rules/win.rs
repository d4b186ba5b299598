//! Win detection: directional streak tracing over the board.

use crate::game::types::{Board, Cell, Symbols};
use tracing::instrument;

/// Step vectors for the four streak directions: down, right, down-right
/// diagonal, up-right diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

/// Checks whether any cell anchors a streak of `win_length` matching symbols.
///
/// Every cell holding a player symbol is tried as an anchor in all four
/// directions, so a cell in the middle of a longer run also triggers
/// detection. The scan is redundant for long runs but never misses one.
#[instrument(skip(board, symbols))]
pub fn check_win(board: &Board, symbols: &Symbols, win_length: usize) -> bool {
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let Some(Cell::Mark(mark)) = board.get(row, col) else {
                continue;
            };
            if !symbols.contains(mark) {
                continue;
            }
            for direction in DIRECTIONS {
                if streak_from(board, row, col, mark, win_length, direction) {
                    return true;
                }
            }
        }
    }
    false
}

/// Traces `length` cells from `(row, col)` along `direction`, checking each
/// holds `mark`. Leaving the board or hitting a different token ends the
/// trace. The loop is bounded by `length`; no recursion.
fn streak_from(
    board: &Board,
    row: usize,
    col: usize,
    mark: char,
    length: usize,
    (d_row, d_col): (isize, isize),
) -> bool {
    let mut row = row as isize;
    let mut col = col as isize;
    for _ in 0..length {
        if row < 0 || col < 0 || row >= board.rows() as isize || col >= board.cols() as isize {
            return false;
        }
        if board.get(row as usize, col as usize) != Some(Cell::Mark(mark)) {
            return false;
        }
        row += d_row;
        col += d_col;
    }
    true
}
