use crate::{game::Game, terminal::Terminal};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::janggi::{Position, Setup};
use std::io::{stdin, stdout};
use tracing::{info, instrument};

/// A hot-seat game of Janggi on the terminal.
///
/// Moves are entered one per line as a pair of squares, e.g. `a7a6`.
/// A move that goes nowhere, e.g. `e9e9`, passes the turn.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The starting layout.
    #[clap(short, long, default_value_t)]
    setup: Setup,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let pos = Position::try_from(self.setup)?;
        let terminal = Terminal::new(stdout(), stdin());
        let game = Game::new(terminal.clone(), terminal);
        let pos = game.play(pos)?;

        println!("{}", pos);
        info!(state = %pos.state());

        Ok(())
    }
}
