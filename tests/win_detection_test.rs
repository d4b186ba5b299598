//! Win-detection tests driven through regular gameplay on the public API.

use gridstreak::GameState;

/// Plays the given 1-indexed moves in order, alternating players.
fn play(state: &mut GameState, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        assert!(
            state.is_move_valid(row, col),
            "scripted move ({row}, {col}) should be valid"
        );
        state.apply_move(row, col);
        state.switch_turn();
    }
}

fn custom_game(rows: usize, cols: usize, win_length: usize) -> GameState {
    let mut state = GameState::new();
    state.set_rows(rows);
    state.set_cols(cols);
    assert!(state.is_valid_win_length(win_length));
    state.set_win_length(win_length);
    state.initialize_board();
    state
}

#[test]
fn test_top_row_win_on_default_board() {
    let mut state = GameState::new();
    // X takes the top row while O sits in the middle row.
    play(&mut state, &[(1, 1), (2, 1), (1, 2), (2, 2), (1, 3)]);
    assert!(state.check_win());
}

#[test]
fn test_no_win_without_streak() {
    let mut state = GameState::new();
    play(&mut state, &[(1, 1), (2, 2), (3, 3), (1, 2)]);
    assert!(!state.check_win());
}

#[test]
fn test_empty_board_has_no_win() {
    assert!(!GameState::new().check_win());
}

#[test]
fn test_column_win() {
    let mut state = GameState::new();
    play(&mut state, &[(1, 2), (1, 1), (2, 2), (1, 3), (3, 2)]);
    assert!(state.check_win());
}

#[test]
fn test_up_right_diagonal_win() {
    let mut state = GameState::new();
    // X at (3,1), (2,2), (1,3); O parked on the top edge.
    play(&mut state, &[(3, 1), (1, 1), (2, 2), (1, 2), (1, 3)]);
    assert!(state.check_win());
}

#[test]
fn test_diagonal_of_four_on_five_by_five() {
    let mut state = custom_game(5, 5, 4);
    // O builds the (2,2)..(5,5) diagonal; X stays at three in a row.
    play(
        &mut state,
        &[
            (1, 1),
            (2, 2),
            (1, 2),
            (3, 3),
            (1, 3),
            (4, 4),
            (5, 1),
            (5, 5),
        ],
    );
    assert!(state.check_win());
}

#[test]
fn test_diagonal_of_three_is_not_enough_for_four() {
    let mut state = custom_game(5, 5, 4);
    play(
        &mut state,
        &[(1, 1), (2, 2), (1, 2), (3, 3), (1, 3), (4, 4)],
    );
    assert!(!state.check_win());
}

#[test]
fn test_run_longer_than_win_length_detected() {
    // Win length 3 with a run of 4: every anchor inside the run traces a
    // full streak, so detection does not depend on scanning the run's
    // first cell.
    let mut state = custom_game(3, 5, 3);
    play(
        &mut state,
        &[
            (1, 1),
            (3, 1),
            (1, 2),
            (3, 2),
            (1, 4),
            (2, 1),
            (1, 3),
        ],
    );
    assert!(state.check_win());
}

#[test]
fn test_win_detected_after_symbol_swap() {
    // Swapped symbols change the tokens written, not the streak logic.
    let mut state = GameState::new();
    state.swap_player_symbols();
    play(&mut state, &[(1, 1), (2, 1), (1, 2), (2, 2), (1, 3)]);
    assert!(state.check_win());
}

#[test]
fn test_rectangular_board_row_win() {
    let mut state = custom_game(3, 6, 3);
    play(&mut state, &[(2, 3), (1, 1), (2, 4), (1, 2), (2, 5)]);
    assert!(state.check_win());
}
