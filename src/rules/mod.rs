//! The Pente rules: move application, capture resolution, win detection.

pub mod engine;

pub use engine::{apply, InvalidMoveError, MoveOutcome, AXES, DIRECTIONS, WIN_CAPTURES, WIN_RUN};
