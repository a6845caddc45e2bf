use crate::janggi::Color;

/// Trait for types that can be seen from the opponent's side of the board.
pub trait Perspective: Copy {
    /// Flips the perspective.
    fn flip(&self) -> Self;

    /// Sets the perspective to the side of the given [`Color`].
    ///
    /// Red's home ranks are the low ones, so red sees the board as is.
    #[inline(always)]
    fn perspective(&self, side: Color) -> Self {
        match side {
            Color::Red => *self,
            Color::Blue => self.flip(),
        }
    }
}
