//! Core types: players, board, game state, and RNG.

pub mod board;
pub mod player;
pub mod rng;
pub mod state;

pub use board::{Board, Cell};
pub use player::{Captures, Player, PlayerPair};
pub use rng::GameRng;
pub use state::{GameStatus, Move, SearchState};
