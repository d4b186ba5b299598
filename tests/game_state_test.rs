//! Tests for the game-state model: configuration, moves, and lifecycle.

use gridstreak::{Cell, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_WIN_LENGTH, GameState, Player};

#[test]
fn test_fresh_board_is_empty_and_not_full() {
    let state = GameState::new();
    assert!(!state.is_board_full());
    for cell in state.board().cells() {
        assert_eq!(*cell, Cell::Empty);
    }
}

#[test]
fn test_initialize_board_clears_cells() {
    let mut state = GameState::new();
    state.apply_move(1, 1);
    state.initialize_board();
    assert!(state.board().cells().iter().all(|c| c.is_empty()));
}

#[test]
fn test_dimension_predicates() {
    let state = GameState::new();
    for n in [0, 1, 2] {
        assert!(!state.is_valid_row_count(n));
        assert!(!state.is_valid_col_count(n));
    }
    for n in [3, 4, 100] {
        assert!(state.is_valid_row_count(n));
        assert!(state.is_valid_col_count(n));
    }
}

#[test]
fn test_win_length_bounded_by_smallest_side() {
    let mut state = GameState::new();
    state.set_rows(4);
    state.set_cols(6);

    assert!(!state.is_valid_win_length(2));
    assert!(state.is_valid_win_length(3));
    assert!(state.is_valid_win_length(4));
    // Fits the columns but not the rows.
    assert!(!state.is_valid_win_length(5));
    assert!(!state.is_valid_win_length(6));
}

#[test]
fn test_win_length_revalidated_against_updated_dimensions() {
    let mut state = GameState::new();
    state.set_rows(5);
    state.set_cols(5);
    assert!(state.is_valid_win_length(5));

    // Shrinking a dimension invalidates the previously acceptable length.
    state.set_rows(3);
    assert!(!state.is_valid_win_length(5));
}

#[test]
fn test_move_validity_bounds() {
    let state = GameState::new();
    assert!(!state.is_move_valid(0, 1));
    assert!(!state.is_move_valid(1, 0));
    assert!(!state.is_move_valid(4, 1));
    assert!(!state.is_move_valid(1, 4));
    assert!(state.is_move_valid(1, 1));
    assert!(state.is_move_valid(3, 3));
}

#[test]
fn test_move_validity_rejects_occupied_cell() {
    let mut state = GameState::new();
    state.apply_move(2, 2);
    assert!(!state.is_move_valid(2, 2));
    assert!(state.is_move_valid(2, 3));
}

#[test]
fn test_move_validity_is_idempotent() {
    let mut state = GameState::new();
    state.apply_move(1, 1);
    let first = state.is_move_valid(1, 1);
    for _ in 0..3 {
        assert_eq!(state.is_move_valid(1, 1), first);
    }
}

#[test]
fn test_apply_move_writes_exactly_one_cell() {
    let mut state = GameState::new();
    state.apply_move(2, 3);

    assert_eq!(state.board().get(1, 2), Some(Cell::Mark('X')));
    let marked = state
        .board()
        .cells()
        .iter()
        .filter(|c| !c.is_empty())
        .count();
    assert_eq!(marked, 1);
}

#[test]
fn test_apply_move_uses_current_player_symbol() {
    let mut state = GameState::new();
    state.apply_move(1, 1);
    state.switch_turn();
    state.apply_move(2, 2);

    assert_eq!(state.board().get(0, 0), Some(Cell::Mark('X')));
    assert_eq!(state.board().get(1, 1), Some(Cell::Mark('O')));
}

#[test]
fn test_switch_turn_changes_player_and_counter_together() {
    let mut state = GameState::new();
    assert_eq!(state.current_player(), Player::One);
    assert_eq!(state.turn(), 1);

    state.switch_turn();
    assert_eq!(state.current_player(), Player::Two);
    assert_eq!(state.turn(), 2);

    state.switch_turn();
    assert_eq!(state.current_player(), Player::One);
    assert_eq!(state.turn(), 3);
}

#[test]
fn test_symbol_swap_is_involution() {
    let mut state = GameState::new();
    state.swap_player_symbols();
    assert_eq!(state.symbols().for_player(Player::One), 'O');
    state.swap_player_symbols();
    assert_eq!(state.symbols().for_player(Player::One), 'X');
    assert_eq!(state.symbols().for_player(Player::Two), 'O');
}

#[test]
fn test_symbol_swap_leaves_played_cells_alone() {
    let mut state = GameState::new();
    state.apply_move(1, 1);
    state.swap_player_symbols();

    // The played cell keeps its token; only future moves use the new
    // assignment.
    assert_eq!(state.board().get(0, 0), Some(Cell::Mark('X')));
    state.apply_move(1, 2);
    assert_eq!(state.board().get(0, 1), Some(Cell::Mark('O')));
}

#[test]
fn test_restart_restores_every_default() {
    let mut state = GameState::new();
    state.set_rows(6);
    state.set_cols(7);
    state.set_win_length(5);
    state.initialize_board();
    state.apply_move(4, 4);
    state.switch_turn();
    state.swap_player_symbols();
    state.toggle_game_over();

    state.restart();

    assert_eq!(state.rows(), DEFAULT_ROWS);
    assert_eq!(state.cols(), DEFAULT_COLS);
    assert_eq!(state.win_length(), DEFAULT_WIN_LENGTH);
    assert_eq!(state.turn(), 1);
    assert_eq!(state.current_player(), Player::One);
    assert!(!state.is_game_over());
    assert!(state.wants_new_game());
    assert_eq!(state.symbols().for_player(Player::One), 'X');
    assert_eq!(state.board().cells().len(), DEFAULT_ROWS * DEFAULT_COLS);
    assert!(state.board().cells().iter().all(|c| c.is_empty()));
}

#[test]
fn test_flag_toggles() {
    let mut state = GameState::new();
    state.toggle_game_over();
    assert!(state.is_game_over());
    state.toggle_wants_new_game();
    assert!(!state.wants_new_game());
}

#[test]
fn test_board_full_on_rectangular_board() {
    let mut state = GameState::new();
    state.set_rows(3);
    state.set_cols(4);
    state.initialize_board();

    // Fill every column of every row except the last cell.
    for row in 1..=3 {
        for col in 1..=4 {
            if (row, col) == (3, 4) {
                continue;
            }
            state.apply_move(row, col);
            state.switch_turn();
        }
    }
    assert!(!state.is_board_full());

    state.apply_move(3, 4);
    assert!(state.is_board_full());
}
