//! Core board types: coordinates, cells, players, board state, RNG.
//!
//! Nothing here knows about learning; agents and the driver build on these.

pub mod board;
pub mod player;
pub mod rng;
pub mod state;

pub use board::{Board, BoardHash, Cell, Coord, Moves, CELLS, SIZE};
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use state::BoardState;
