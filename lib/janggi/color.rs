use crate::util::Enum;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::{Not, RangeInclusive};

/// The side a [`Piece`][`crate::janggi::Piece`] belongs to.
///
/// Blue always moves first.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Color {
    #[display(fmt = "blue")]
    Blue,
    #[display(fmt = "red")]
    Red,
}

impl Color {
    /// The rank increment that moves a piece of this color toward the opponent.
    #[inline(always)]
    pub fn forward(&self) -> i8 {
        match self {
            Color::Blue => -1,
            Color::Red => 1,
        }
    }
}

unsafe impl Enum for Color {
    const RANGE: RangeInclusive<Self> = Color::Blue..=Color::Red;

    #[inline(always)]
    fn repr(&self) -> u8 {
        *self as _
    }
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn color_implements_not_operator(c: Color) {
        assert_eq!(!!c, c);
        assert_ne!(!c, c);
    }

    #[proptest]
    fn opposing_colors_move_in_opposite_directions(c: Color) {
        assert_eq!(c.forward(), -(!c).forward());
    }

    #[test]
    fn blue_advances_toward_the_first_rank() {
        assert_eq!(Color::Blue.forward(), -1);
    }
}
