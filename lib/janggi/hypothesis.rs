use crate::janggi::{is_check, Board, Color, Move, Piece};
use derive_more::Deref;

/// A copy of a [`Board`] with a [`Move`] applied to it.
///
/// The original board is never touched, the hypothesis is simply dropped unless committed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deref)]
pub struct Hypothesis {
    #[deref]
    board: Board,
    captured: Option<Piece>,
}

impl Hypothesis {
    /// Applies a [`Move`] to a copy of the [`Board`].
    #[inline(always)]
    pub fn new(board: &Board, m: Move) -> Self {
        let mut board = *board;
        let captured = board.apply(m);
        Hypothesis { board, captured }
    }

    /// The piece the move would capture, if any.
    #[inline(always)]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// Whether the general of `side` would be threatened.
    #[inline(always)]
    pub fn exposes(&self, side: Color) -> bool {
        is_check(&self.board, side)
    }

    /// The board after the move.
    #[inline(always)]
    pub fn commit(self) -> Board {
        self.board
    }
}
