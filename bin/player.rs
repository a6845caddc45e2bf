use lib::janggi::{Move, Position};

/// Trait for types that know how to play Janggi.
#[cfg_attr(test, mockall::automock(type Error = String;))]
pub trait Player {
    /// The reason why a move could not be played.
    type Error;

    /// Chooses the next [`Move`].
    fn play(&mut self, pos: &Position) -> Result<Move, Self::Error>;
}
