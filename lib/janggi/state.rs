use crate::janggi::Color;
use derive_more::Display;

/// Whether the game is still on, and if not who won it.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum GameState {
    #[default]
    #[display(fmt = "UNFINISHED")]
    Unfinished,
    #[display(fmt = "BLUE_WON")]
    BlueWon,
    #[display(fmt = "RED_WON")]
    RedWon,
}

impl GameState {
    /// The state where `side` has won.
    #[inline(always)]
    pub fn won_by(side: Color) -> Self {
        match side {
            Color::Blue => GameState::BlueWon,
            Color::Red => GameState::RedWon,
        }
    }

    /// The winning side, if any.
    #[inline(always)]
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameState::Unfinished => None,
            GameState::BlueWon => Some(Color::Blue),
            GameState::RedWon => Some(Color::Red),
        }
    }

    /// Whether no more moves are accepted.
    #[inline(always)]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }
}
