//! Command-line interface for gridstreak.

use crate::session::GamePreset;
use clap::Parser;

/// Gridstreak - two-player tic-tac-toe with configurable board and streak
#[derive(Parser, Debug)]
#[command(name = "gridstreak")]
#[command(about = "Generalized tic-tac-toe for two players at one terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Row count for the first game (skips the board setup prompts)
    #[arg(long, requires = "cols", requires = "win_length")]
    pub rows: Option<usize>,

    /// Column count for the first game
    #[arg(long, requires = "rows", requires = "win_length")]
    pub cols: Option<usize>,

    /// Win streak length for the first game
    #[arg(long, requires = "rows", requires = "cols")]
    pub win_length: Option<usize>,
}

impl Cli {
    /// The board preset, when all three values were supplied.
    pub fn preset(&self) -> Option<GamePreset> {
        match (self.rows, self.cols, self.win_length) {
            (Some(rows), Some(cols), Some(win_length)) => Some(GamePreset {
                rows,
                cols,
                win_length,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_no_preset() {
        let cli = Cli::parse_from(["gridstreak"]);
        assert_eq!(cli.preset(), None);
    }

    #[test]
    fn test_full_preset() {
        let cli = Cli::parse_from(["gridstreak", "--rows", "5", "--cols", "4", "--win-length", "4"]);
        assert_eq!(
            cli.preset(),
            Some(GamePreset {
                rows: 5,
                cols: 4,
                win_length: 4
            })
        );
    }

    #[test]
    fn test_partial_preset_rejected() {
        assert!(Cli::try_parse_from(["gridstreak", "--rows", "5"]).is_err());
    }
}
