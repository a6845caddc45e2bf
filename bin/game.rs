use crate::player::Player;
use derive_more::{Constructor, Display, Error};
use lib::janggi::{Color, Position};
use std::fmt::Display;
use tracing::{field::display, info, instrument, warn, Span};

/// The reason why the [`Game`] was interrupted.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "the {} player encountered an error")]
pub enum GameInterrupted<B, R> {
    #[display(fmt = "blue")]
    Blue(B),

    #[display(fmt = "red")]
    Red(R),
}

/// Holds the players of a game of Janggi.
#[derive(Debug, Constructor)]
pub struct Game<B, R> {
    blue: B,
    red: R,
}

impl<B, R> Game<B, R>
where
    B: Player,
    R: Player,
    B::Error: Display,
    R::Error: Display,
{
    /// Plays from the given [`Position`] until one side is checkmated.
    ///
    /// Moves rejected by the [`Position`] are reported and the same player is asked again.
    #[instrument(level = "debug", skip(self, pos), err, fields(state))]
    pub fn play(
        mut self,
        mut pos: Position,
    ) -> Result<Position, GameInterrupted<B::Error, R::Error>> {
        use GameInterrupted::*;

        loop {
            if pos.state().is_over() {
                Span::current().record("state", display(pos.state()));
                break Ok(pos);
            }

            let m = match pos.turn() {
                Color::Blue => self.blue.play(&pos).map_err(Blue)?,
                Color::Red => self.red.play(&pos).map_err(Red)?,
            };

            match pos.play(m) {
                Err(e) => warn!(%m, "{}", e),
                Ok(o) => {
                    if let Some(c) = o.checked {
                        info!(%m, "{} is in check", c);
                    }
                }
            }
        }
    }
}
