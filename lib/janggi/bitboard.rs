use crate::janggi::{File, Rank, Square};
use crate::util::{Assume, Enum};
use derive_more::*;
use std::fmt::{self, Write};

/// A set of squares on a Janggi board.
#[derive(
    Default,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Deref,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(transparent)]
pub struct Bitboard(#[cfg_attr(test, strategy(0..Bitboard::full().0 + 1))] u128);

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\n')?;
        for rank in Rank::iter().rev() {
            for file in File::iter() {
                let sq = Square::new(file, rank);
                f.write_char(if self.contains(sq) { '■' } else { '◻' })?;
                f.write_char(if file < File::I { ' ' } else { '\n' })?;
            }
        }

        Ok(())
    }
}

impl Bitboard {
    /// An empty board.
    #[inline(always)]
    pub const fn empty() -> Self {
        Bitboard(0)
    }

    /// A full board.
    #[inline(always)]
    pub const fn full() -> Self {
        Bitboard((1 << 90) - 1)
    }

    /// A bitboard with exactly the given squares.
    ///
    /// # Example
    /// ```
    /// # use lib::janggi::*;
    /// assert_eq!(
    ///     Vec::from_iter(Bitboard::from_squares(&[Square::E9, Square::D1])),
    ///     vec![Square::D1, Square::E9]
    /// );
    /// ```
    #[inline(always)]
    pub const fn from_squares(squares: &[Square]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < squares.len() {
            bits |= 1 << squares[i] as u8;
            i += 1;
        }

        Bitboard(bits)
    }

    /// The number of [`Square`]s in the set.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as _
    }

    /// Whether the board is empty.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether this [`Square`] is in the set.
    #[inline(always)]
    pub const fn contains(&self, sq: Square) -> bool {
        self.0 & (1 << sq as u8) != 0
    }

    /// Adds a [`Square`] to this bitboard.
    #[inline(always)]
    pub const fn with(&self, sq: Square) -> Self {
        Bitboard(self.0 | 1 << sq as u8)
    }

    /// Removes a [`Square`] from this bitboard.
    #[inline(always)]
    pub const fn without(&self, sq: Square) -> Self {
        Bitboard(self.0 & !(1 << sq as u8))
    }

    /// An iterator over the [`Square`]s in this bitboard.
    #[inline(always)]
    pub fn iter(&self) -> Squares {
        Squares::new(*self)
    }
}

/// The set of [`Square`]s on the board not in this bitboard.
impl std::ops::Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Bitboard(!self.0 & Bitboard::full().0)
    }
}

impl FromIterator<Square> for Bitboard {
    #[inline(always)]
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::empty(), |bb, sq| bb.with(sq))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = Squares;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        Squares::new(self)
    }
}

/// An iterator over the [`Square`]s in a [`Bitboard`], in ascending order.
#[derive(Debug, Constructor)]
pub struct Squares(Bitboard);

impl Iterator for Squares {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0.is_empty() {
            None
        } else {
            let sq = Square::try_from_repr(self.0.trailing_zeros() as u8).assume();
            self.0 = self.0.without(sq);
            Some(sq)
        }
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl ExactSizeIterator for Squares {
    #[inline(always)]
    fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_strategy::proptest;

    #[test]
    fn empty_constructs_board_with_no_squares() {
        assert_eq!(Bitboard::empty().iter().count(), 0);
    }

    #[test]
    fn full_constructs_board_with_all_squares() {
        assert_eq!(Bitboard::full().iter().count(), 90);
        assert_eq!(Vec::from_iter(Bitboard::full()), Vec::from_iter(Square::iter()));
    }

    #[proptest]
    fn inverse_stays_within_the_board(bb: Bitboard) {
        assert_eq!((!bb).len(), 90 - bb.len());
        assert_eq!(!!bb, bb);
    }

    #[proptest]
    fn len_returns_number_of_squares_on_the_bitboard(bb: Bitboard) {
        assert_eq!(bb.len(), bb.iter().count());
    }

    #[proptest]
    fn is_empty_returns_whether_there_are_squares_on_the_bitboard(bb: Bitboard) {
        assert_eq!(bb.is_empty(), bb.iter().count() == 0);
    }

    #[proptest]
    fn contains_checks_whether_square_is_on_the_bitboard(bb: Bitboard) {
        for sq in bb {
            assert!(bb.contains(sq));
        }
    }

    #[proptest]
    fn with_adds_square_to_set(bb: Bitboard, sq: Square) {
        assert!(bb.with(sq).contains(sq));
    }

    #[proptest]
    fn without_removes_square_from_set(bb: Bitboard, sq: Square) {
        assert!(!bb.without(sq).contains(sq));
    }

    #[proptest]
    fn from_squares_collects_exactly_the_given_squares(sqs: HashSet<Square>) {
        let sqs = Vec::from_iter(sqs);
        let bb = Bitboard::from_squares(&sqs);
        assert_eq!(bb, Bitboard::from_iter(sqs.iter().copied()));
        assert_eq!(bb.len(), sqs.len());
    }

    #[proptest]
    fn iterates_squares_in_ascending_order(bb: Bitboard) {
        let sqs = Vec::from_iter(bb);
        assert!(sqs.windows(2).all(|w| w[0] < w[1]));
    }

    #[proptest]
    fn squares_iterator_has_an_exact_size(bb: Bitboard) {
        assert_eq!(bb.iter().len(), bb.len());
    }
}
