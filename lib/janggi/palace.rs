use crate::janggi::{Bitboard, Color, Square};
use derive_more::Display;

/// One of the two 3x3 fortresses that confine generals and guards.
///
/// Palaces also mark the only places on the board where diagonal lines exist.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}'s palace", _0)]
pub struct Palace(Color);

impl Palace {
    const RED: Bitboard = Bitboard::from_squares(&[
        Square::D1,
        Square::E1,
        Square::F1,
        Square::D2,
        Square::E2,
        Square::F2,
        Square::D3,
        Square::E3,
        Square::F3,
    ]);

    const BLUE: Bitboard = Bitboard::from_squares(&[
        Square::D8,
        Square::E8,
        Square::F8,
        Square::D9,
        Square::E9,
        Square::F9,
        Square::D10,
        Square::E10,
        Square::F10,
    ]);

    /// The tiles joined by the palace diagonals, that is the corners and centers of both palaces.
    pub const DIAGONALS: Bitboard = Bitboard::from_squares(&[
        Square::D1,
        Square::F1,
        Square::E2,
        Square::D3,
        Square::F3,
        Square::D8,
        Square::F8,
        Square::E9,
        Square::D10,
        Square::F10,
    ]);

    /// The palace of the given side.
    #[inline(always)]
    pub fn new(side: Color) -> Self {
        Palace(side)
    }

    /// The palace containing this square, if any.
    #[inline(always)]
    pub fn of(sq: Square) -> Option<Self> {
        if Self::RED.contains(sq) {
            Some(Palace(Color::Red))
        } else if Self::BLUE.contains(sq) {
            Some(Palace(Color::Blue))
        } else {
            None
        }
    }

    /// The squares inside this palace.
    #[inline(always)]
    pub fn bitboard(&self) -> Bitboard {
        match self.0 {
            Color::Red => Self::RED,
            Color::Blue => Self::BLUE,
        }
    }

    /// Whether the square is inside this palace.
    #[inline(always)]
    pub fn contains(&self, sq: Square) -> bool {
        self.bitboard().contains(sq)
    }

    /// Whether a piece standing on this square may move along the palace diagonals.
    #[inline(always)]
    pub fn is_diagonal(sq: Square) -> bool {
        Self::DIAGONALS.contains(sq)
    }
}
