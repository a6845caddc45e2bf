use crate::janggi::{Color, ParseRoleError, Role};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Janggi [piece][`Role`] of a certain [`Color`].
///
/// Pieces carry no state other than their identity, where they stand is up to the
/// [`Board`][`crate::janggi::Board`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece(pub Color, pub Role);

impl Piece {
    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.0
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.1
    }
}

/// Blue pieces are printed in upper case, red pieces in lower case.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.role().to_string();
        match self.color() {
            Color::Blue => f.write_str(&c.to_uppercase()),
            Color::Red => f.write_str(&c),
        }
    }
}

/// The reason why parsing [`Piece`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse piece")]
pub struct ParsePieceError(ParseRoleError);

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let role = s.to_ascii_lowercase().parse()?;
        if s.chars().all(|c| c.is_ascii_lowercase()) {
            Ok(Piece(Color::Red, role))
        } else {
            Ok(Piece(Color::Blue, role))
        }
    }
}
