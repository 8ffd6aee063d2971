//! Error types for the checkers core
//!
//! Running out of moves is not an error: it is a terminal state reported by
//! [`crate::rules::is_terminal`] and [`crate::rules::winner`].

use thiserror::Error;

use crate::types::Move;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckersError {
    /// Coordinate outside the 8x8 grid. Indicates a caller bug.
    #[error("position ({row}, {col}) is outside the board")]
    OutOfBounds { row: i8, col: i8 },

    /// The move cannot be played on this board.
    #[error("invalid move {mv}: {reason}")]
    InvalidMove { mv: Move, reason: &'static str },

    /// Malformed board layout string.
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

impl CheckersError {
    pub(crate) fn invalid(mv: &Move, reason: &'static str) -> Self {
        CheckersError::InvalidMove {
            mv: mv.clone(),
            reason,
        }
    }
}

pub type CheckersResult<T> = Result<T, CheckersError>;
