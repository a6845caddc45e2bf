use crate::janggi::*;
use crate::util::Enum;
use std::fmt::{self, Write};
use std::ops::Index;

/// The Janggi board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Board {
    #[cfg_attr(test, map(|pieces: Vec<(Square, Piece)>| {
        let mut tiles = [None; 90];
        for (sq, p) in pieces {
            tiles[sq as usize] = Some(p);
        }

        tiles
    }))]
    tiles: [Option<Piece>; 90],
}

impl Default for Board {
    /// The standard starting layout.
    fn default() -> Self {
        use Role::*;

        const LAYOUT: [(Role, Square); 16] = [
            (Chariot, Square::A1),
            (Chariot, Square::I1),
            (Elephant, Square::B1),
            (Elephant, Square::G1),
            (Horse, Square::C1),
            (Horse, Square::H1),
            (Guard, Square::D1),
            (Guard, Square::F1),
            (General, Square::E2),
            (Cannon, Square::B3),
            (Cannon, Square::H3),
            (Soldier, Square::A4),
            (Soldier, Square::C4),
            (Soldier, Square::E4),
            (Soldier, Square::G4),
            (Soldier, Square::I4),
        ];

        let mut board = Board::empty();
        for c in Color::iter() {
            for (r, sq) in LAYOUT {
                board.place(Piece(c, r), sq.perspective(c));
            }
        }

        board
    }
}

impl Board {
    /// A board with no pieces on it.
    #[inline(always)]
    pub fn empty() -> Self {
        Board { tiles: [None; 90] }
    }

    /// [`Square`]s occupied by pieces of a [`Color`].
    #[inline(always)]
    pub fn by_color(&self, c: Color) -> Bitboard {
        self.iter()
            .filter(|(p, _)| p.color() == c)
            .map(|(_, sq)| sq)
            .collect()
    }

    /// [`Square`] occupied by the general of a [`Color`].
    #[inline(always)]
    pub fn general(&self, side: Color) -> Option<Square> {
        let general = Piece(side, Role::General);
        self.iter().find(|&(p, _)| p == general).map(|(_, sq)| sq)
    }

    /// An iterator over all pieces on the board, in ascending order of their squares.
    #[inline(always)]
    pub fn iter(&self) -> impl Iterator<Item = (Piece, Square)> + '_ {
        Square::iter().filter_map(|sq| Some((self[sq]?, sq)))
    }

    /// Places a piece on a square, returning whatever stood there before.
    #[inline(always)]
    pub fn place(&mut self, p: Piece, sq: Square) -> Option<Piece> {
        self.tiles[sq as usize].replace(p)
    }

    /// Removes the piece on a square, if any.
    #[inline(always)]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.tiles[sq as usize].take()
    }

    /// Moves whatever stands on the origin of the [`Move`] to its destination.
    ///
    /// Returns the captured piece, if any. Passing leaves the board untouched.
    #[inline(always)]
    pub fn apply(&mut self, m: Move) -> Option<Piece> {
        if m.is_pass() {
            return None;
        }

        let p = self.remove(m.whence())?;
        self.place(p, m.whither())
    }

    /// A [`Hypothesis`] where the [`Move`] has been applied to a copy of this board.
    #[inline(always)]
    pub fn suppose(&self, m: Move) -> Hypothesis {
        Hypothesis::new(self, m)
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.tiles[sq as usize]
    }
}

/// Prints the board from blue's side, blue pieces in upper case.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            write!(f, "{:>2} ", rank.to_string())?;
            for file in File::iter() {
                match self[Square::new(file, rank)] {
                    Some(p) => write!(f, " {}", p)?,
                    None => f.write_str(" .")?,
                }
            }

            f.write_char('\n')?;
        }

        f.write_str("   ")?;
        for file in File::iter() {
            write!(f, " {}", file)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn standard_layout_has_sixteen_pieces_per_side() {
        let board = Board::default();
        assert_eq!(board.by_color(Color::Blue).len(), 16);
        assert_eq!(board.by_color(Color::Red).len(), 16);
    }

    #[test]
    fn standard_layout_is_symmetric() {
        let board = Board::default();
        for (p, sq) in board.iter() {
            assert_eq!(board[sq.flip()], Some(Piece(!p.color(), p.role())));
        }
    }

    #[test]
    fn generals_start_at_the_center_of_their_palaces() {
        let board = Board::default();
        assert_eq!(board.general(Color::Red), Some(Square::E2));
        assert_eq!(board.general(Color::Blue), Some(Square::E9));
    }

    #[test]
    fn empty_board_has_no_pieces() {
        assert_eq!(Board::empty().iter().count(), 0);
        assert_eq!(Board::empty().general(Color::Blue), None);
    }

    #[proptest]
    fn place_replaces_piece_on_square(mut b: Board, p: Piece, sq: Square) {
        let before = b[sq];
        assert_eq!(b.place(p, sq), before);
        assert_eq!(b[sq], Some(p));
    }

    #[proptest]
    fn remove_empties_square(mut b: Board, sq: Square) {
        let before = b[sq];
        assert_eq!(b.remove(sq), before);
        assert_eq!(b[sq], None);
    }

    #[proptest]
    fn apply_moves_piece_and_returns_capture(
        mut b: Board,
        #[filter(#b[#m.whence()].is_some() && !#m.is_pass())] m: Move,
    ) {
        let p = b[m.whence()];
        let captured = b[m.whither()];
        assert_eq!(b.apply(m), captured);
        assert_eq!(b[m.whence()], None);
        assert_eq!(b[m.whither()], p);
    }

    #[proptest]
    fn passing_leaves_board_untouched(b: Board, sq: Square) {
        let mut c = b;
        assert_eq!(c.apply(Move(sq, sq)), None);
        assert_eq!(c, b);
    }

    #[test]
    fn board_is_printed_from_the_tenth_rank_down() {
        let board = Board::default().to_string();
        let lines = Vec::from_iter(board.lines());
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "10  R E H A . A E H R");
        assert_eq!(lines[1], " 9  . . . . K . . . .");
        assert_eq!(lines[9], " 1  r e h a . a e h r");
        assert_eq!(lines[10], "    a b c d e f g h i");
    }
}
