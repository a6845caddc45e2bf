use crate::janggi::{ParseSquareError, Square};
use derive_more::{Display, Error, From};
use std::str::FromStr;

/// A Janggi move in coordinate notation, e.g. `a7a6`.
///
/// A move whose origin and destination coincide is a pass.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", _0, _1)]
pub struct Move(pub Square, pub Square);

impl Move {
    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }

    /// Whether this move leaves the board as is.
    #[inline(always)]
    pub fn is_pass(&self) -> bool {
        self.0 == self.1
    }
}

/// The reason why the string is not a valid move.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseMoveError {
    #[display(fmt = "failed to parse move, expected a pair of squares such as `a7a6`")]
    #[from(ignore)]
    InvalidSyntax,
    #[display(fmt = "failed to parse move")]
    InvalidSquare(ParseSquareError),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (i, _) = s
            .char_indices()
            .filter(|(_, c)| c.is_alphabetic())
            .nth(1)
            .ok_or(ParseMoveError::InvalidSyntax)?;

        Ok(Move(s[..i].trim_end().parse()?, s[i..].parse()?))
    }
}
