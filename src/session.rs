//! Session orchestration: sequences setup, turns, and the new-game loop.

use crate::game::GameState;
use crate::view::Presentation;
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Board configuration supplied up front (for example from the command
/// line) instead of through the setup prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GamePreset {
    /// Row count.
    pub rows: usize,
    /// Column count.
    pub cols: usize,
    /// Win streak length.
    pub win_length: usize,
}

impl GamePreset {
    /// Applies the preset through the state's validity predicates, in the
    /// required order: dimensions first, win length against the updated
    /// dimensions, then a fresh board. Returns false and leaves no partial
    /// configuration behind if any value is rejected.
    pub fn apply(&self, state: &mut GameState) -> bool {
        if !state.is_valid_row_count(self.rows) || !state.is_valid_col_count(self.cols) {
            return false;
        }
        state.set_rows(self.rows);
        state.set_cols(self.cols);
        if !state.is_valid_win_length(self.win_length) {
            state.restart();
            return false;
        }
        state.set_win_length(self.win_length);
        state.initialize_board();
        true
    }
}

/// Drives a full session: setup, the per-turn loop, and the new-game loop.
///
/// Owns the [`GameState`] and a [`Presentation`]; all game logic runs
/// through the state's operations and all user I/O through the view.
#[derive(Debug)]
pub struct SessionOrchestrator<P> {
    state: GameState,
    view: P,
}

impl<P: Presentation> SessionOrchestrator<P> {
    /// Creates an orchestrator over a fresh default game.
    pub fn new(view: P) -> Self {
        Self {
            state: GameState::new(),
            view,
        }
    }

    /// Read access to the game state, mainly for inspection after a run.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read access to the view.
    pub fn view(&self) -> &P {
        &self.view
    }

    /// Runs games until a player declines to start another.
    ///
    /// A preset, when given, configures the first game and skips its board
    /// setup prompts; every later game goes through the interactive setup.
    #[instrument(skip(self, preset))]
    pub fn run(&mut self, preset: Option<GamePreset>) -> Result<()> {
        info!("starting session");
        let mut preset = preset;
        loop {
            self.view.show_new_game_banner()?;
            match preset.take() {
                Some(preset) if preset.apply(&mut self.state) => {
                    debug!(?preset, "board configured from preset");
                }
                _ => self.configure_board()?,
            }
            if self.view.confirm_symbol_swap(&self.state)? {
                self.state.swap_player_symbols();
            }

            self.play_game()?;

            self.view.show_game_over()?;
            if self.view.confirm_new_game()? {
                self.state.restart();
            } else {
                self.state.toggle_wants_new_game();
            }
            if !self.state.wants_new_game() {
                info!("session finished");
                return Ok(());
            }
        }
    }

    /// Prompts for board shape unless the default game is accepted.
    ///
    /// The win length is asked only after both dimensions have taken
    /// effect, since its valid range depends on them; the board is then
    /// rebuilt at the new dimensions.
    fn configure_board(&mut self) -> Result<()> {
        if self.view.confirm_default_game()? {
            return Ok(());
        }
        let rows = self.view.prompt_row_count(&self.state)?;
        self.state.set_rows(rows);
        let cols = self.view.prompt_col_count(&self.state)?;
        self.state.set_cols(cols);
        let win_length = self.view.prompt_win_length(&self.state)?;
        self.state.set_win_length(win_length);
        self.state.initialize_board();
        debug!(rows, cols, win_length, "board configured interactively");
        Ok(())
    }

    /// The per-turn loop: one turn per iteration until the game is over or
    /// the board fills up with no winner.
    fn play_game(&mut self) -> Result<()> {
        loop {
            self.view.show_turn(&self.state)?;
            self.view.show_board(&self.state)?;

            if self.view.confirm_give_up()? {
                // The opponent of whoever resigns takes the game.
                let winner = self.state.current_player().opponent();
                info!(%winner, "player resigned");
                self.view.announce_winner(winner)?;
                self.state.toggle_game_over();
            } else {
                self.take_turn()?;
            }

            if self.state.is_game_over() || self.state.is_board_full() {
                return Ok(());
            }
        }
    }

    /// Prompts for a move until it validates, applies it, and settles the
    /// turn: win announcement if the move completes a streak, then the
    /// hand-off to the other player. The turn counter advances even on the
    /// winning move.
    fn take_turn(&mut self) -> Result<()> {
        let (row, col) = loop {
            let row = self.view.prompt_move_row()?;
            let col = self.view.prompt_move_col()?;
            if self.state.is_move_valid(row, col) {
                break (row, col);
            }
            self.view.show_move_invalid()?;
        };

        self.state.apply_move(row, col);
        self.view.show_board(&self.state)?;

        if self.state.check_win() {
            let winner = self.state.current_player();
            info!(%winner, turn = self.state.turn(), "winning streak completed");
            self.view.announce_winner(winner)?;
            self.state.toggle_game_over();
        }
        self.state.switch_turn();
        Ok(())
    }
}
