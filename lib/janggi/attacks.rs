use crate::janggi::{destinations, Board, Color, Square};

/// Whether any piece of `attacker` could move onto `target`.
pub fn is_threatened(board: &Board, target: Square, attacker: Color) -> bool {
    board
        .iter()
        .filter(|(p, _)| p.color() == attacker)
        .any(|(_, sq)| destinations(board, sq).contains(target))
}

/// Whether the general of `side` is threatened by the opponent.
///
/// A side without a general is never in check.
pub fn is_check(board: &Board, side: Color) -> bool {
    board
        .general(side)
        .is_some_and(|sq| is_threatened(board, sq, !side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::janggi::{Piece, Role};
    use test_strategy::proptest;

    #[test]
    fn nobody_is_in_check_in_the_starting_layout() {
        assert!(!is_check(&Board::default(), Color::Blue));
        assert!(!is_check(&Board::default(), Color::Red));
    }

    #[proptest]
    fn side_without_general_is_never_in_check(mut b: Board, c: Color) {
        if let Some(sq) = b.general(c) {
            b.remove(sq);
        }

        // There may be more than one general on an arbitrary board.
        if b.general(c).is_none() {
            assert!(!is_check(&b, c));
        }
    }

    #[proptest]
    fn target_is_threatened_iff_it_is_a_destination(b: Board, target: Square, c: Color) {
        let expected = b
            .iter()
            .filter(|(p, _)| p.color() == c)
            .any(|(_, sq)| destinations(&b, sq).contains(target));

        assert_eq!(is_threatened(&b, target, c), expected);
    }

    #[test]
    fn chariot_on_an_open_file_gives_check() {
        let mut b = Board::empty();
        b.place(Piece(Color::Red, Role::General), Square::E2);
        b.place(Piece(Color::Blue, Role::General), Square::D9);
        b.place(Piece(Color::Blue, Role::Chariot), Square::E7);
        assert!(is_check(&b, Color::Red));
        assert!(!is_check(&b, Color::Blue));

        b.place(Piece(Color::Red, Role::Soldier), Square::E4);
        assert!(!is_check(&b, Color::Red));
    }

    #[test]
    fn cannon_gives_check_over_a_screen() {
        let mut b = Board::empty();
        b.place(Piece(Color::Red, Role::General), Square::E2);
        b.place(Piece(Color::Blue, Role::General), Square::D9);
        b.place(Piece(Color::Blue, Role::Cannon), Square::E7);
        assert!(!is_check(&b, Color::Red));

        b.place(Piece(Color::Red, Role::Soldier), Square::E4);
        assert!(is_check(&b, Color::Red));
    }

    #[test]
    fn facing_generals_do_not_threaten_each_other() {
        let mut b = Board::empty();
        b.place(Piece(Color::Red, Role::General), Square::E2);
        b.place(Piece(Color::Blue, Role::General), Square::E9);
        assert!(!is_check(&b, Color::Red));
        assert!(!is_check(&b, Color::Blue));
    }
}
