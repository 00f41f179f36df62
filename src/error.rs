//! Error types for the noughts crate

use std::fmt;

use thiserror::Error;

/// Why a move was rejected by [`Board::apply_move`](crate::tictactoe::Board::apply_move)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// The coordinate lies outside the N×N grid
    OutOfBounds,
    /// The target cell already holds a mark
    Occupied,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::OutOfBounds => write!(f, "coordinate is off the board"),
            IllegalMoveReason::Occupied => write!(f, "cell is already occupied"),
        }
    }
}

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move ({row}, {col}): {reason}")]
    IllegalMove {
        row: usize,
        col: usize,
        reason: IllegalMoveReason,
    },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
