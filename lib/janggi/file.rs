use crate::util::Enum;
use derive_more::{Display, Error};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// A column on the Janggi board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum File {
    #[display(fmt = "a")]
    A,
    #[display(fmt = "b")]
    B,
    #[display(fmt = "c")]
    C,
    #[display(fmt = "d")]
    D,
    #[display(fmt = "e")]
    E,
    #[display(fmt = "f")]
    F,
    #[display(fmt = "g")]
    G,
    #[display(fmt = "h")]
    H,
    #[display(fmt = "i")]
    I,
}

unsafe impl Enum for File {
    const RANGE: RangeInclusive<Self> = File::A..=File::I;

    #[inline(always)]
    fn repr(&self) -> u8 {
        *self as _
    }
}

/// The reason why parsing [`File`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse file, expected letter in the range `({}..={})`", "File::A", "File::I")]
pub struct ParseFileError;

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(File::A),
            "b" => Ok(File::B),
            "c" => Ok(File::C),
            "d" => Ok(File::D),
            "e" => Ok(File::E),
            "f" => Ok(File::F),
            "g" => Ok(File::G),
            "h" => Ok(File::H),
            "i" => Ok(File::I),
            _ => Err(ParseFileError),
        }
    }
}
