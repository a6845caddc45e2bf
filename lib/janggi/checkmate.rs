use crate::janggi::{destinations, Board, Color, Move};
use tracing::{instrument, trace};

/// Searches for a move that leaves the general of `defender` out of reach.
///
/// Every piece of the defender is tried against every one of its destinations, stopping at the
/// first move that works. Passing is not considered, since it never lifts a check.
#[cfg_attr(debug_assertions, instrument(level = "trace", skip(board), ret))]
pub fn escape(board: &Board, defender: Color) -> Option<Move> {
    board
        .iter()
        .filter(|(p, _)| p.color() == defender)
        .flat_map(|(_, wc)| destinations(board, wc).into_iter().map(move |wt| Move(wc, wt)))
        .find(|&m| {
            let exposed = board.suppose(m).exposes(defender);
            trace!(%m, exposed);
            !exposed
        })
}

/// Whether `defender` has no move that would leave its general out of reach.
#[inline(always)]
pub fn is_checkmate(board: &Board, defender: Color) -> bool {
    escape(board, defender).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::janggi::{is_check, Piece, Role, Square};
    use test_strategy::proptest;

    fn board(pieces: &[(Square, Color, Role)]) -> Board {
        let mut board = Board::empty();
        for &(sq, c, r) in pieces {
            board.place(Piece(c, r), sq);
        }

        board
    }

    #[proptest]
    fn escape_is_a_legal_move_that_lifts_the_check(b: Board, c: Color) {
        if let Some(m) = escape(&b, c) {
            assert_eq!(b[m.whence()].map(|p| p.color()), Some(c));
            assert!(destinations(&b, m.whence()).contains(m.whither()));
            assert!(!b.suppose(m).exposes(c));
        }
    }

    #[proptest]
    fn checkmate_means_every_move_leaves_the_general_exposed(b: Board, c: Color) {
        let brute_force = b
            .iter()
            .filter(|(p, _)| p.color() == c)
            .all(|(_, wc)| {
                destinations(&b, wc)
                    .into_iter()
                    .all(|wt| b.suppose(Move(wc, wt)).exposes(c))
            });

        assert_eq!(is_checkmate(&b, c), brute_force);
    }

    #[test]
    fn three_chariots_checkmate_a_lone_general() {
        let b = board(&[
            (Square::E10, Color::Blue, Role::General),
            (Square::D8, Color::Blue, Role::Chariot),
            (Square::F8, Color::Blue, Role::Chariot),
            (Square::E7, Color::Blue, Role::Chariot),
            (Square::E2, Color::Red, Role::General),
        ]);

        assert!(is_check(&b, Color::Red));
        assert!(is_checkmate(&b, Color::Red));
    }

    #[test]
    fn guard_shields_the_general_from_the_file_behind_it() {
        let b = board(&[
            (Square::E10, Color::Blue, Role::General),
            (Square::D8, Color::Blue, Role::Chariot),
            (Square::F8, Color::Blue, Role::Chariot),
            (Square::E7, Color::Blue, Role::Chariot),
            (Square::E2, Color::Red, Role::General),
            (Square::F3, Color::Red, Role::Guard),
        ]);

        assert!(is_check(&b, Color::Red));
        assert!(!b.suppose(Move(Square::F3, Square::E3)).exposes(Color::Red));
        assert_eq!(escape(&b, Color::Red), Some(Move(Square::E2, Square::F1)));
    }

    #[test]
    fn pinned_guard_can_neither_capture_nor_block_the_checker() {
        let b = board(&[
            (Square::D10, Color::Blue, Role::General),
            (Square::E6, Color::Blue, Role::Chariot),
            (Square::D3, Color::Blue, Role::Horse),
            (Square::B2, Color::Blue, Role::Horse),
            (Square::H2, Color::Blue, Role::Horse),
            (Square::E1, Color::Red, Role::General),
            (Square::E2, Color::Red, Role::Guard),
        ]);

        assert!(is_check(&b, Color::Red));

        // Capturing the horse or blocking its leg opens the file to the chariot.
        assert!(destinations(&b, Square::E2).contains(Square::D3));
        assert!(destinations(&b, Square::E2).contains(Square::D2));
        assert!(b.suppose(Move(Square::E2, Square::D3)).exposes(Color::Red));
        assert!(b.suppose(Move(Square::E2, Square::D2)).exposes(Color::Red));
        assert!(b.suppose(Move(Square::E2, Square::E3)).exposes(Color::Red));

        assert_eq!(escape(&b, Color::Red), None);
    }

    #[test]
    fn nobody_is_checkmated_in_the_starting_layout() {
        assert!(!is_checkmate(&Board::default(), Color::Blue));
        assert!(!is_checkmate(&Board::default(), Color::Red));
    }
}
