mod board;
mod types;

pub use board::{Board, BoardSettings, Construction};
pub use types::{Coordinate, Occupant};
