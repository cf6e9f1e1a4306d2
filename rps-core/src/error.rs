//! Errors raised by the round engine and its collaborators.

use thiserror::Error;

/// Text that does not name one of the three moves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid move {0:?}: expected rock, paper or scissors (R/P/S)")]
pub struct InvalidMoveError(pub String);

/// Everything that can stop a round from resolving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    InvalidMove(#[from] InvalidMoveError),

    #[error("cannot draw from empty range [{low}, {high}]")]
    EmptyRange { low: u32, high: u32 },

    #[error("draw {value} is outside [{low}, {high}]")]
    DrawOutOfRange { value: u32, low: u32, high: u32 },

    #[error("randomness source exhausted")]
    RandomnessExhausted,
}
