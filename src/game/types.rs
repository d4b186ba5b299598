//! Core domain types for the game: players, cells, symbols, and the board.

use serde::{Deserialize, Serialize};

/// One of the two players at the terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// The player who moves first.
    #[display("Player 1")]
    One,
    /// The player who moves second.
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A single cell on the board.
///
/// An occupied cell stores the display token that was current when the move
/// was made, so swapping the player symbols later never rewrites played
/// cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    Empty,
    /// Cell holding a player's symbol token.
    Mark(char),
}

impl Cell {
    /// Checks whether the cell is unoccupied.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// The ordered pair of player symbol tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    marks: [char; 2],
}

impl Symbols {
    /// Default token for the first player.
    pub const DEFAULT_FIRST: char = 'X';
    /// Default token for the second player.
    pub const DEFAULT_SECOND: char = 'O';

    /// Returns the token currently assigned to the given player.
    pub fn for_player(&self, player: Player) -> char {
        match player {
            Player::One => self.marks[0],
            Player::Two => self.marks[1],
        }
    }

    /// Checks whether the token belongs to either player.
    pub fn contains(&self, mark: char) -> bool {
        self.marks.contains(&mark)
    }

    /// Exchanges the two assignments. Applying twice restores the original.
    pub fn swap(&mut self) {
        self.marks.swap(0, 1);
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            marks: [Self::DEFAULT_FIRST, Self::DEFAULT_SECOND],
        }
    }
}

/// A `rows x cols` grid of cells in row-major order.
///
/// The board is replaced wholesale whenever dimensions change; it is never
/// resized in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Gets the cell at 0-indexed `(row, col)`, or `None` out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    /// Sets the cell at 0-indexed `(row, col)`. Out-of-bounds writes are
    /// ignored; callers validate coordinates first.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = cell;
        }
    }

    /// Checks whether the cell at 0-indexed `(row, col)` is unoccupied.
    /// Out-of-bounds coordinates count as occupied.
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Empty))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
