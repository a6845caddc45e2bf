mod attacks;
mod bitboard;
mod board;
mod checkmate;
mod color;
mod file;
mod hypothesis;
mod r#move;
mod movegen;
mod palace;
mod perspective;
mod piece;
mod position;
mod rank;
mod role;
mod setup;
mod square;
mod state;

pub use attacks::*;
pub use bitboard::*;
pub use board::*;
pub use checkmate::*;
pub use color::*;
pub use file::*;
pub use hypothesis::*;
pub use movegen::*;
pub use palace::*;
pub use perspective::*;
pub use piece::*;
pub use position::*;
pub use r#move::*;
pub use rank::*;
pub use role::*;
pub use setup::*;
pub use square::*;
pub use state::*;
