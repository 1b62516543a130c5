pub mod board;
pub mod coord;
pub mod path;
pub mod piece;
