use crate::janggi::{Bitboard, Board, Color, Palace, Role, Square};
use std::iter::successors;

const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

/// The squares the piece standing on `whence` could move to next.
///
/// Whether the move would expose the mover's own general is not taken into account.
/// An empty origin has no destinations.
pub fn destinations(board: &Board, whence: Square) -> Bitboard {
    let Some(p) = board[whence] else {
        return Bitboard::empty();
    };

    let side = p.color();
    let bb = match p.role() {
        Role::Soldier => soldier(whence, side),
        Role::Chariot => chariot(board, whence),
        Role::Cannon => cannon(board, whence),
        Role::Horse => horse(board, whence),
        Role::Elephant => elephant(board, whence),
        Role::Guard | Role::General => royal(whence, side),
    };

    bb & !board.by_color(side)
}

/// The squares visited by repeatedly stepping in a direction, up to the edge of the board.
fn ray(whence: Square, (df, dr): (i8, i8)) -> impl Iterator<Item = Square> {
    successors(whence.step(df, dr), move |sq| sq.step(df, dr))
}

/// Rays along the palace diagonals, if `whence` stands on one of them.
fn diagonals(whence: Square) -> impl Iterator<Item = impl Iterator<Item = Square>> {
    let palace = Palace::of(whence).filter(|_| Palace::is_diagonal(whence));
    palace.into_iter().flat_map(move |palace| {
        DIAGONAL.map(move |d| ray(whence, d).take_while(move |&sq| palace.contains(sq)))
    })
}

/// Every square up to and including the first occupied one.
fn slide(board: &Board, ray: impl Iterator<Item = Square>) -> Bitboard {
    let mut bb = Bitboard::empty();
    for sq in ray {
        bb = bb.with(sq);
        if board[sq].is_some() {
            break;
        }
    }

    bb
}

/// Every square past exactly one screen, up to and including the first occupied one.
///
/// Cannons can neither serve as the screen nor be captured.
fn leap(board: &Board, mut ray: impl Iterator<Item = Square>) -> Bitboard {
    let mut bb = Bitboard::empty();
    match ray.by_ref().find_map(|sq| board[sq]) {
        Some(screen) if screen.role() != Role::Cannon => {
            for sq in ray {
                match board[sq] {
                    None => bb = bb.with(sq),
                    Some(p) => {
                        if p.role() != Role::Cannon {
                            bb = bb.with(sq);
                        }

                        break;
                    }
                }
            }
        }

        _ => {}
    }

    bb
}

fn soldier(whence: Square, side: Color) -> Bitboard {
    let fwd = side.forward();
    let mut bb: Bitboard = [(0, fwd), (-1, 0), (1, 0)]
        .into_iter()
        .filter_map(|(df, dr)| whence.step(df, dr))
        .collect();

    let enemy = Palace::new(!side);
    if Palace::is_diagonal(whence) && enemy.contains(whence) {
        bb |= [(-1, fwd), (1, fwd)]
            .into_iter()
            .filter_map(|(df, dr)| whence.step(df, dr))
            .filter(|&sq| enemy.contains(sq))
            .collect();
    }

    bb
}

fn chariot(board: &Board, whence: Square) -> Bitboard {
    let mut bb = Bitboard::empty();

    for d in ORTHOGONAL {
        bb |= slide(board, ray(whence, d));
    }

    for r in diagonals(whence) {
        bb |= slide(board, r);
    }

    bb
}

fn cannon(board: &Board, whence: Square) -> Bitboard {
    let mut bb = Bitboard::empty();

    for d in ORTHOGONAL {
        bb |= leap(board, ray(whence, d));
    }

    for r in diagonals(whence) {
        bb |= leap(board, r);
    }

    bb
}

fn horse(board: &Board, whence: Square) -> Bitboard {
    let mut bb = Bitboard::empty();

    for (df, dr) in ORTHOGONAL {
        let Some(mid) = whence.step(df, dr).filter(|&sq| board[sq].is_none()) else {
            continue;
        };

        for (pf, pr) in [(dr, df), (-dr, -df)] {
            if let Some(sq) = mid.step(df + pf, dr + pr) {
                bb = bb.with(sq);
            }
        }
    }

    bb
}

fn elephant(board: &Board, whence: Square) -> Bitboard {
    let mut bb = Bitboard::empty();

    for (df, dr) in ORTHOGONAL {
        let Some(mid) = whence.step(df, dr).filter(|&sq| board[sq].is_none()) else {
            continue;
        };

        for (pf, pr) in [(dr, df), (-dr, -df)] {
            let (df, dr) = (df + pf, dr + pr);
            let Some(first) = mid.step(df, dr).filter(|&sq| board[sq].is_none()) else {
                continue;
            };

            if let Some(sq) = first.step(df, dr) {
                bb = bb.with(sq);
            }
        }
    }

    bb
}

fn royal(whence: Square, side: Color) -> Bitboard {
    let palace = Palace::new(side);
    let diagonal: &[(i8, i8)] = if Palace::is_diagonal(whence) {
        &DIAGONAL[..]
    } else {
        &[]
    };

    ORTHOGONAL
        .iter()
        .chain(diagonal)
        .filter_map(|&(df, dr)| whence.step(df, dr))
        .filter(|&sq| palace.contains(sq))
        .collect()
}
