use crate::util::Enum;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Formatter, Write};
use std::{ops::RangeInclusive, str::FromStr};

/// The archetype of a [`Piece`][`crate::janggi::Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Role {
    Soldier,
    Cannon,
    Chariot,
    Horse,
    Elephant,
    Guard,
    General,
}

impl Role {
    /// Whether this role is confined to its own palace.
    #[inline(always)]
    pub fn is_royal(&self) -> bool {
        matches!(self, Role::Guard | Role::General)
    }
}

unsafe impl Enum for Role {
    const RANGE: RangeInclusive<Self> = Role::Soldier..=Role::General;

    #[inline(always)]
    fn repr(&self) -> u8 {
        *self as _
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Role::Soldier => f.write_char('p'),
            Role::Cannon => f.write_char('c'),
            Role::Chariot => f.write_char('r'),
            Role::Horse => f.write_char('h'),
            Role::Elephant => f.write_char('e'),
            Role::Guard => f.write_char('a'),
            Role::General => f.write_char('k'),
        }
    }
}

/// The reason why parsing [`Role`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse role, expected one of `pcrheak`")]
pub struct ParseRoleError;

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" => Ok(Role::Soldier),
            "c" => Ok(Role::Cannon),
            "r" => Ok(Role::Chariot),
            "h" => Ok(Role::Horse),
            "e" => Ok(Role::Elephant),
            "a" => Ok(Role::Guard),
            "k" => Ok(Role::General),
            _ => Err(ParseRoleError),
        }
    }
}
