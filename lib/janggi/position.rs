use crate::janggi::*;
use crate::util::Enum;
use derive_more::{Display, Error};
use proptest::sample::{Selector, SelectorStrategy};
use proptest::{prelude::*, strategy::Map};
use std::{fmt, ops::Range};
use tracing::{debug, instrument};

/// The reason why a [`Move`] was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Rejection {
    #[display(fmt = "the game is already over")]
    GameAlreadyOver,
    #[display(fmt = "no such tile on the board")]
    NoSuchTile,
    #[display(fmt = "there is no piece on the origin tile")]
    EmptyOrigin,
    #[display(fmt = "the piece on the origin tile belongs to the side not to move")]
    WrongTurn,
    #[display(fmt = "cannot pass the turn while in check")]
    SelfPassWhileInCheck,
    #[display(fmt = "the piece cannot move there")]
    GeometryViolation,
    #[display(fmt = "the move would leave the general exposed")]
    SelfExposure,
}

/// What happened as a result of a [`Move`] being played.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MoveOutcome {
    /// The move played.
    pub applied: Move,
    /// The piece captured, if any.
    pub captured: Option<Piece>,
    /// The side placed in check, if any.
    pub checked: Option<Color>,
    /// The state of the game after the move.
    pub state: GameState,
}

/// The current position of a Janggi game.
///
/// Besides the board, this keeps track of the side to move, which sides are in check and
/// whether the game is over.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    board: Board,
    turn: Color,
    checks: [bool; 2],
    state: GameState,
}

impl Default for Position {
    /// The standard starting position, blue to move.
    fn default() -> Self {
        Position::new(Board::default(), Color::Blue)
    }
}

impl Arbitrary for Position {
    type Parameters = ();
    type Strategy = Map<(Range<usize>, SelectorStrategy), fn((usize, Selector)) -> Position>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..48, any::<Selector>()).prop_map(|(moves, selector)| {
            let mut pos = Position::default();

            for _ in 0..moves {
                let Some(m) = selector.try_select(pos.moves()) else {
                    break;
                };

                if pos.play(m).is_err() {
                    break;
                }
            }

            pos
        })
    }
}

impl Position {
    /// Sets up a position, working out which sides are in check.
    ///
    /// The board is assumed to hold exactly one general per side, each in its own palace.
    pub(crate) fn new(board: Board, turn: Color) -> Self {
        let mut checks = [false; 2];
        for c in Color::iter() {
            checks[c as usize] = is_check(&board, c);
        }

        let state = if checks[turn as usize] && is_checkmate(&board, turn) {
            GameState::won_by(!turn)
        } else {
            GameState::Unfinished
        };

        Position {
            board,
            turn,
            checks,
            state,
        }
    }

    /// The board.
    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Whether the general of `side` is in check.
    #[inline(always)]
    pub fn is_in_check(&self, side: Color) -> bool {
        self.checks[side as usize]
    }

    /// Whether the game is still on, and if not who won it.
    #[inline(always)]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Whether the side to move is checkmated.
    #[inline(always)]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.turn) && is_checkmate(&self.board, self.turn)
    }

    /// An iterator over the legal [`Move`]s of the side to move, passing excluded.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        let side = self.turn;
        self.board
            .iter()
            .filter(move |(p, _)| p.color() == side && !self.state.is_over())
            .flat_map(move |(_, wc)| {
                let dests = destinations(&self.board, wc);
                dests.into_iter().map(move |wt| Move(wc, wt))
            })
            .filter(move |&m| !self.board.suppose(m).exposes(side))
    }

    /// Plays a [`Move`] given in textual coordinates, e.g. `("a7", "a6")`.
    pub fn attempt_move(&mut self, whence: &str, whither: &str) -> Result<MoveOutcome, Rejection> {
        if self.state.is_over() {
            debug!(%whence, %whither, "game already over");
            return Err(Rejection::GameAlreadyOver);
        }

        match (whence.parse(), whither.parse()) {
            (Ok(wc), Ok(wt)) => self.play(Move(wc, wt)),
            _ => {
                debug!(%whence, %whither, "no such tile");
                Err(Rejection::NoSuchTile)
            }
        }
    }

    /// Plays a [`Move`] if legal in this position.
    ///
    /// A rejected move leaves the position untouched.
    #[instrument(level = "debug", skip(self), fields(turn = %self.turn))]
    pub fn play(&mut self, m: Move) -> Result<MoveOutcome, Rejection> {
        self.validate(m)
            .map(|h| self.commit(m, h))
            .map_err(|e| {
                debug!(%e, "rejected");
                e
            })
    }

    /// Plays a [`Move`] that has already been validated against this position.
    fn commit(&mut self, m: Move, hypothesis: Option<Hypothesis>) -> MoveOutcome {
        let mover = self.turn;
        self.turn = !mover;

        let Some(h) = hypothesis else {
            return MoveOutcome {
                applied: m,
                captured: None,
                checked: None,
                state: self.state,
            };
        };

        let captured = h.captured();
        self.board = h.commit();
        self.checks[mover as usize] = false;

        let checked = is_check(&self.board, !mover);
        self.checks[!mover as usize] = checked;

        if checked && is_checkmate(&self.board, !mover) {
            debug!(winner = %mover, "checkmate");
            self.state = GameState::won_by(mover);
        }

        MoveOutcome {
            applied: m,
            captured,
            checked: checked.then_some(!mover),
            state: self.state,
        }
    }

    /// Checks a [`Move`] against this position, returning the resulting board unless passing.
    fn validate(&self, m: Move) -> Result<Option<Hypothesis>, Rejection> {
        if self.state.is_over() {
            return Err(Rejection::GameAlreadyOver);
        }

        let p = self.board[m.whence()].ok_or(Rejection::EmptyOrigin)?;

        if p.color() != self.turn {
            return Err(Rejection::WrongTurn);
        }

        if m.is_pass() {
            return if self.is_in_check(self.turn) {
                Err(Rejection::SelfPassWhileInCheck)
            } else {
                Ok(None)
            };
        }

        if p.role().is_royal() && !Palace::new(p.color()).contains(m.whither()) {
            return Err(Rejection::GeometryViolation);
        }

        if !destinations(&self.board, m.whence()).contains(m.whither()) {
            return Err(Rejection::GeometryViolation);
        }

        let h = self.board.suppose(m);
        if h.exposes(self.turn) {
            return Err(Rejection::SelfExposure);
        }

        Ok(Some(h))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;

        match self.state.winner() {
            Some(c) => write!(f, "{} won", c),
            None if self.is_in_check(self.turn) => write!(f, "{} to move, in check", self.turn),
            None => write!(f, "{} to move", self.turn),
        }
    }
}
