use anyhow::Error as Anyhow;
use clap::Parser;
use lib::janggi::{Color, Position, Setup};
use lib::util::Enum;
use tracing::instrument;

/// Analyzes a position.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Analyze {
    /// The layout to analyze.
    #[clap(short, long, default_value_t)]
    setup: Setup,
}

impl Analyze {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let pos = Position::try_from(self.setup)?;

        println!("{}", pos.board());
        println!("turn: {}", pos.turn());
        println!("state: {}", pos.state());

        for c in Color::iter() {
            println!("{} in check: {}", c, pos.is_in_check(c));
        }

        let moves = Vec::from_iter(pos.moves().map(|m| m.to_string()));
        println!("moves: {}", moves.join(" "));

        if pos.is_in_check(pos.turn()) {
            println!("checkmate: {}", pos.is_checkmate());
        }

        Ok(())
    }
}
