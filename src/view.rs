//! Presentation layer: the orchestrator's I/O seam and the console view.

use crate::game::{Cell, GameState, Player};
use anyhow::{Result, bail};
use std::io::{BufRead, BufReader, Stdin, Stdout, Write, stdin, stdout};

/// Token shown for an unoccupied cell.
const EMPTY_MARKER: char = '-';

/// User-facing I/O required by the session orchestrator.
///
/// Prompt methods own their retry loops: they return only answers that
/// satisfy the relevant `GameState` predicate, re-asking on anything else.
/// Move coordinates are the exception — the orchestrator validates those
/// against the board so it can report the rejection between attempts.
pub trait Presentation {
    /// Announces that a new game is starting.
    fn show_new_game_banner(&mut self) -> Result<()>;

    /// Asks whether to play with the default configuration.
    fn confirm_default_game(&mut self) -> Result<bool>;

    /// Asks for a row count until `state.is_valid_row_count` accepts it.
    fn prompt_row_count(&mut self, state: &GameState) -> Result<usize>;

    /// Asks for a column count until `state.is_valid_col_count` accepts it.
    fn prompt_col_count(&mut self, state: &GameState) -> Result<usize>;

    /// Asks for a win streak length until `state.is_valid_win_length`
    /// accepts it. Only meaningful once both dimensions are set.
    fn prompt_win_length(&mut self, state: &GameState) -> Result<usize>;

    /// Asks whether to swap the player symbols.
    fn confirm_symbol_swap(&mut self, state: &GameState) -> Result<bool>;

    /// Shows the turn number and whose turn it is.
    fn show_turn(&mut self, state: &GameState) -> Result<()>;

    /// Renders the board.
    fn show_board(&mut self, state: &GameState) -> Result<()>;

    /// Asks whether the current player gives up.
    fn confirm_give_up(&mut self) -> Result<bool>;

    /// Asks for the row of the next move (1-indexed).
    fn prompt_move_row(&mut self) -> Result<usize>;

    /// Asks for the column of the next move (1-indexed).
    fn prompt_move_col(&mut self) -> Result<usize>;

    /// Reports that the attempted move was rejected.
    fn show_move_invalid(&mut self) -> Result<()>;

    /// Announces the winner.
    fn announce_winner(&mut self, winner: Player) -> Result<()>;

    /// Announces the end of the game.
    fn show_game_over(&mut self) -> Result<()>;

    /// Asks whether to play another game.
    fn confirm_new_game(&mut self) -> Result<bool>;
}

/// Line-oriented console implementation of [`Presentation`].
///
/// Generic over the reader and writer so tests can drive it with in-memory
/// buffers; [`ConsoleView::stdio`] wires it to the real terminal.
#[derive(Debug)]
pub struct ConsoleView<R, W> {
    input: R,
    output: W,
}

impl ConsoleView<BufReader<Stdin>, Stdout> {
    /// Creates a view attached to stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(stdin()), stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleView<R, W> {
    /// Creates a view over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input stream closed");
        }
        Ok(line)
    }

    /// Prompts until the answer parses as yes or no (case-insensitive,
    /// `y`/`n` accepted).
    fn prompt_yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            match self.read_line()?.trim().to_lowercase().as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => {}
            }
        }
    }

    /// Prompts until the answer parses as a non-negative integer.
    fn prompt_number(&mut self, prompt: &str) -> Result<usize> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            if let Ok(number) = self.read_line()?.trim().parse::<usize>() {
                return Ok(number);
            }
        }
    }
}

impl<R: BufRead, W: Write> Presentation for ConsoleView<R, W> {
    fn show_new_game_banner(&mut self) -> Result<()> {
        writeln!(self.output, "---- NEW GAME STARTED ----")?;
        Ok(())
    }

    fn confirm_default_game(&mut self) -> Result<bool> {
        self.prompt_yes_no("Do you wish to play the default game? Enter Yes or No: ")
    }

    fn prompt_row_count(&mut self, state: &GameState) -> Result<usize> {
        loop {
            let rows = self.prompt_number(
                "How many rows should the board have? Enter an integer no less than 3. Default is 3: ",
            )?;
            if state.is_valid_row_count(rows) {
                return Ok(rows);
            }
        }
    }

    fn prompt_col_count(&mut self, state: &GameState) -> Result<usize> {
        loop {
            let cols = self.prompt_number(
                "How many columns should the board have? Enter an integer no less than 3. Default is 3: ",
            )?;
            if state.is_valid_col_count(cols) {
                return Ok(cols);
            }
        }
    }

    fn prompt_win_length(&mut self, state: &GameState) -> Result<usize> {
        loop {
            writeln!(self.output, "How many consecutive symbols to win the game?")?;
            writeln!(
                self.output,
                "Default is 3 and the number can be at most the length of the board's smallest side."
            )?;
            let win_length = self.prompt_number("Enter an integer no less than 3: ")?;
            if state.is_valid_win_length(win_length) {
                return Ok(win_length);
            }
        }
    }

    fn confirm_symbol_swap(&mut self, state: &GameState) -> Result<bool> {
        writeln!(
            self.output,
            "Default symbol for Player 1 is {} and {} for Player 2.",
            state.symbols().for_player(Player::One),
            state.symbols().for_player(Player::Two),
        )?;
        self.prompt_yes_no("Do you wish to swap symbols? Enter Yes or No: ")
    }

    fn show_turn(&mut self, state: &GameState) -> Result<()> {
        writeln!(self.output, "Turn: {}\n", state.turn())?;
        writeln!(self.output, "It's {}'s turn.", state.current_player())?;
        Ok(())
    }

    fn show_board(&mut self, state: &GameState) -> Result<()> {
        let mut rendered = String::new();
        rendered.push('\n');
        for row in 0..state.rows() {
            rendered.push_str(&format!("{} ", row + 1));
            for col in 0..state.cols() {
                match state.board().get(row, col) {
                    Some(Cell::Mark(mark)) => rendered.push(mark),
                    _ => rendered.push(EMPTY_MARKER),
                }
            }
            rendered.push('\n');
        }
        // Column ruler under the board to aid coordinate entry.
        rendered.push_str("\n  ");
        for col in 0..state.cols() {
            rendered.push_str(&(col + 1).to_string());
        }
        writeln!(self.output, "{rendered}")?;
        Ok(())
    }

    fn confirm_give_up(&mut self) -> Result<bool> {
        self.prompt_yes_no("Do you wish to give up? Enter Yes or No: ")
    }

    fn prompt_move_row(&mut self) -> Result<usize> {
        self.prompt_number("Enter row number for move: ")
    }

    fn prompt_move_col(&mut self) -> Result<usize> {
        self.prompt_number("Enter column number for move: ")
    }

    fn show_move_invalid(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Move invalid. Enter row and column number for an unoccupied space represented by '{EMPTY_MARKER}'."
        )?;
        Ok(())
    }

    fn announce_winner(&mut self, winner: Player) -> Result<()> {
        writeln!(self.output, "{winner} wins!")?;
        Ok(())
    }

    fn show_game_over(&mut self) -> Result<()> {
        writeln!(self.output, "Game over!")?;
        Ok(())
    }

    fn confirm_new_game(&mut self) -> Result<bool> {
        self.prompt_yes_no("Do you wish to play a new game? Enter Yes or No: ")
    }
}
