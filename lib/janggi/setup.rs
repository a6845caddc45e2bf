use crate::janggi::*;
use crate::util::Enum;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Describes how the pieces are laid out at the start of a game.
///
/// Setups are written in [RON], e.g. `standard` or
/// `custom(turn: Red, pieces: [(E2, (Red, General)), (E9, (Blue, General))])`.
///
/// [RON]: https://github.com/ron-rs/ron
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum Setup {
    /// The standard starting layout, blue to move.
    #[default]
    Standard,
    /// An arbitrary layout.
    Custom {
        turn: Color,
        pieces: Vec<(Square, Piece)>,
    },
}

impl fmt::Display for Setup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

/// The reason why parsing [`Setup`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse setup")]
pub struct ParseSetupError(ron::de::SpannedError);

impl FromStr for Setup {
    type Err = ParseSetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

/// The reason why a [`Setup`] does not describe a valid [`Position`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum InvalidSetup {
    #[display(fmt = "more than one piece placed on `{}`", _0)]
    Overlap(#[error(not(source))] Square),
    #[display(fmt = "{} has no general", _0)]
    MissingGeneral(#[error(not(source))] Color),
    #[display(fmt = "{} has more than one general", _0)]
    ExtraGeneral(#[error(not(source))] Color),
    #[display(fmt = "the piece on `{}` is outside its palace", _0)]
    OutsidePalace(#[error(not(source))] Square),
    #[display(fmt = "the side not to move is in check")]
    OpponentInCheck,
}

impl TryFrom<Setup> for Position {
    type Error = InvalidSetup;

    fn try_from(setup: Setup) -> Result<Self, Self::Error> {
        let (turn, pieces) = match setup {
            Setup::Standard => return Ok(Position::default()),
            Setup::Custom { turn, pieces } => (turn, pieces),
        };

        let mut board = Board::empty();
        for (sq, p) in pieces {
            if board.place(p, sq).is_some() {
                return Err(InvalidSetup::Overlap(sq));
            }

            if p.role().is_royal() && !Palace::new(p.color()).contains(sq) {
                return Err(InvalidSetup::OutsidePalace(sq));
            }
        }

        for c in Color::iter() {
            let general = Piece(c, Role::General);
            match board.iter().filter(|&(p, _)| p == general).count() {
                0 => return Err(InvalidSetup::MissingGeneral(c)),
                1 => continue,
                _ => return Err(InvalidSetup::ExtraGeneral(c)),
            }
        }

        if is_check(&board, !turn) {
            return Err(InvalidSetup::OpponentInCheck);
        }

        Ok(Position::new(board, turn))
    }
}
