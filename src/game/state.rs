//! Complete game state: configuration, board, symbols, and turn tracking.

use super::rules;
use super::types::{Board, Cell, Player, Symbols};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 3;
/// Default number of columns.
pub const DEFAULT_COLS: usize = 3;
/// Default streak length required to win.
pub const DEFAULT_WIN_LENGTH: usize = 3;

/// The complete state of a game session.
///
/// `GameState` is the single owner of the board, the configuration, and the
/// turn flags. All mutation goes through its operations; the orchestrator
/// never touches the fields directly.
///
/// The raw setters perform no validation. Callers check the matching
/// predicate first and call [`GameState::initialize_board`] after any
/// dimension change; move operations on a stale board shape are not
/// meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    rows: usize,
    cols: usize,
    win_length: usize,
    symbols: Symbols,
    first_player_turn: bool,
    turn: u32,
    game_over: bool,
    wants_new_game: bool,
    board: Board,
}

impl GameState {
    /// Creates a game with default configuration and a fresh board.
    pub fn new() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            win_length: DEFAULT_WIN_LENGTH,
            symbols: Symbols::default(),
            first_player_turn: true,
            turn: 1,
            game_over: false,
            wants_new_game: true,
            board: Board::new(DEFAULT_ROWS, DEFAULT_COLS),
        }
    }

    // ── configuration ──────────────────────────────────────────

    /// Sets the row count. No validation; see [`GameState::is_valid_row_count`].
    pub fn set_rows(&mut self, rows: usize) {
        self.rows = rows;
    }

    /// Sets the column count. No validation; see [`GameState::is_valid_col_count`].
    pub fn set_cols(&mut self, cols: usize) {
        self.cols = cols;
    }

    /// Sets the win streak length. No validation; see
    /// [`GameState::is_valid_win_length`]. Must be set only after both
    /// dimensions are final, since they bound the valid range.
    pub fn set_win_length(&mut self, win_length: usize) {
        self.win_length = win_length;
    }

    /// A board needs at least 3 rows.
    pub fn is_valid_row_count(&self, rows: usize) -> bool {
        rows > 2
    }

    /// A board needs at least 3 columns.
    pub fn is_valid_col_count(&self, cols: usize) -> bool {
        cols > 2
    }

    /// A win streak must be at least 3 and fit along the shortest side of
    /// the currently configured board.
    pub fn is_valid_win_length(&self, win_length: usize) -> bool {
        win_length > 2 && win_length <= self.rows && win_length <= self.cols
    }

    /// Replaces the board with an empty one at the current dimensions.
    /// Must be called after any dimension change, before play resumes.
    #[instrument(skip(self), fields(rows = self.rows, cols = self.cols))]
    pub fn initialize_board(&mut self) {
        self.board = Board::new(self.rows, self.cols);
    }

    // ── moves ──────────────────────────────────────────────────

    /// Checks a move given 1-indexed user coordinates: in range and
    /// targeting an empty cell. Never panics; out-of-range and occupied
    /// targets simply return false.
    pub fn is_move_valid(&self, row: usize, col: usize) -> bool {
        if row == 0 || row > self.rows || col == 0 || col > self.cols {
            return false;
        }
        self.board.is_empty_at(row - 1, col - 1)
    }

    /// Writes the current player's symbol at 1-indexed `(row, col)`.
    ///
    /// The caller must have confirmed [`GameState::is_move_valid`]; an
    /// invalid move is a caller contract violation and is ignored rather
    /// than detected.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn apply_move(&mut self, row: usize, col: usize) {
        let mark = self.symbols.for_player(self.current_player());
        self.board.set(row - 1, col - 1, Cell::Mark(mark));
    }

    // ── queries ────────────────────────────────────────────────

    /// Checks whether every cell is occupied.
    pub fn is_board_full(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Checks whether any streak of `win_length` matching symbols exists.
    pub fn check_win(&self) -> bool {
        rules::check_win(&self.board, &self.symbols, self.win_length)
    }

    // ── turn and session flags ─────────────────────────────────

    /// Passes the turn to the other player and advances the turn counter.
    /// The two always change together.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn switch_turn(&mut self) {
        self.first_player_turn = !self.first_player_turn;
        self.turn += 1;
    }

    /// Flips the game-over flag. Used once per game termination event.
    pub fn toggle_game_over(&mut self) {
        self.game_over = !self.game_over;
    }

    /// Flips the session-continuation flag. Used when a player declines a
    /// new game.
    pub fn toggle_wants_new_game(&mut self) {
        self.wants_new_game = !self.wants_new_game;
    }

    /// Exchanges the two symbol assignments. Cells already on the board
    /// keep the token they were played with.
    pub fn swap_player_symbols(&mut self) {
        self.symbols.swap();
    }

    /// Resets configuration, symbols, and turn state to defaults and
    /// replaces the board with a fresh empty one.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.rows = DEFAULT_ROWS;
        self.cols = DEFAULT_COLS;
        self.win_length = DEFAULT_WIN_LENGTH;
        self.symbols = Symbols::default();
        self.first_player_turn = true;
        self.turn = 1;
        self.game_over = false;
        self.wants_new_game = true;
        self.initialize_board();
    }

    // ── getters ────────────────────────────────────────────────

    /// Configured row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Configured column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Configured win streak length.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        if self.first_player_turn {
            Player::One
        } else {
            Player::Two
        }
    }

    /// True while the first player is to move.
    pub fn is_first_player_turn(&self) -> bool {
        self.first_player_turn
    }

    /// The 1-based turn counter.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Whether the current game has ended.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Whether the session should continue with another game.
    pub fn wants_new_game(&self) -> bool {
        self.wants_new_game
    }

    /// The current symbol assignments.
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    /// The board contents, read-only.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
