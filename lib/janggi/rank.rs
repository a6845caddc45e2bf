use crate::janggi::Perspective;
use crate::util::Enum;
use derive_more::{Display, Error};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// A row on the Janggi board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Rank {
    #[display(fmt = "1")]
    First,
    #[display(fmt = "2")]
    Second,
    #[display(fmt = "3")]
    Third,
    #[display(fmt = "4")]
    Fourth,
    #[display(fmt = "5")]
    Fifth,
    #[display(fmt = "6")]
    Sixth,
    #[display(fmt = "7")]
    Seventh,
    #[display(fmt = "8")]
    Eighth,
    #[display(fmt = "9")]
    Ninth,
    #[display(fmt = "10")]
    Tenth,
}

unsafe impl Enum for Rank {
    const RANGE: RangeInclusive<Self> = Rank::First..=Rank::Tenth;

    #[inline(always)]
    fn repr(&self) -> u8 {
        *self as _
    }
}

impl Perspective for Rank {
    /// This rank as seen from the opposite side of the board.
    #[inline(always)]
    fn flip(&self) -> Self {
        Self::from_repr(Rank::Tenth.repr() - self.repr())
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse rank, expected number in the range `({}..={})`", "Rank::First", "Rank::Tenth")]
pub struct ParseRankError;

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Rank::First),
            "2" => Ok(Rank::Second),
            "3" => Ok(Rank::Third),
            "4" => Ok(Rank::Fourth),
            "5" => Ok(Rank::Fifth),
            "6" => Ok(Rank::Sixth),
            "7" => Ok(Rank::Seventh),
            "8" => Ok(Rank::Eighth),
            "9" => Ok(Rank::Ninth),
            "10" => Ok(Rank::Tenth),
            _ => Err(ParseRankError),
        }
    }
}
