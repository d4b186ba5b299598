//! Gridstreak - console entry point.

use anyhow::{Result, bail};
use clap::Parser;
use gridstreak::{Cli, ConsoleView, GameState, SessionOrchestrator};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the game on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let preset = cli.preset();
    if let Some(preset) = preset {
        // Reject bad presets before any prompting.
        let mut probe = GameState::new();
        if !preset.apply(&mut probe) {
            bail!(
                "invalid board preset: rows and cols must be at least 3, \
                 win length at least 3 and no larger than the smallest side"
            );
        }
    }

    let mut session = SessionOrchestrator::new(ConsoleView::stdio());
    session.run(preset)
}
