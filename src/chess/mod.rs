//! Chess board model: coordinates, pieces, their raw movement geometry and
//! the board state they are placed on.

pub mod board;
pub mod core;
pub mod game;
pub mod movegen;
pub mod piece;
pub mod registry;
