use crate::janggi::{File, ParseFileError, ParseRankError, Perspective, Rank};
use crate::util::Enum;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::{fmt, str::FromStr};

/// A tile on the Janggi board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1, I1,
    A2, B2, C2, D2, E2, F2, G2, H2, I2,
    A3, B3, C3, D3, E3, F3, G3, H3, I3,
    A4, B4, C4, D4, E4, F4, G4, H4, I4,
    A5, B5, C5, D5, E5, F5, G5, H5, I5,
    A6, B6, C6, D6, E6, F6, G6, H6, I6,
    A7, B7, C7, D7, E7, F7, G7, H7, I7,
    A8, B8, C8, D8, E8, F8, G8, H8, I8,
    A9, B9, C9, D9, E9, F9, G9, H9, I9,
    A10, B10, C10, D10, E10, F10, G10, H10, I10,
}

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline(always)]
    pub fn new(f: File, r: Rank) -> Self {
        Self::from_repr(r.repr() * File::count() as u8 + f.repr())
    }

    /// This square's [`File`].
    #[inline(always)]
    pub fn file(&self) -> File {
        File::from_repr(self.repr() % File::count() as u8)
    }

    /// This square's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        Rank::from_repr(self.repr() / File::count() as u8)
    }

    /// The square `df` files and `dr` ranks away, if it is on the board.
    #[inline(always)]
    pub fn step(&self, df: i8, dr: i8) -> Option<Self> {
        Some(Square::new(self.file().offset(df)?, self.rank().offset(dr)?))
    }
}

unsafe impl Enum for Square {
    const RANGE: RangeInclusive<Self> = Square::A1..=Square::I10;

    #[inline(always)]
    fn repr(&self) -> u8 {
        *self as _
    }
}

impl Perspective for Square {
    /// Flips this square's [`Rank`].
    #[inline(always)]
    fn flip(&self) -> Self {
        Square::new(self.file(), self.rank().flip())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.file(), f)?;
        fmt::Display::fmt(&self.rank(), f)?;
        Ok(())
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display(fmt = "failed to parse square")]
    InvalidFile(ParseFileError),
    #[display(fmt = "failed to parse square")]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Square::new(s[..i].parse()?, s[i..].parse()?))
    }
}
