//! Turn sequencing on top of the stateless rules.
//!
//! A turn is one simple move, or one or more capture hops by the same piece.
//! After a capture the piece keeps jumping while it has captures from its
//! landing square; only then does the other side move.

use tracing::trace;

use crate::board::Board;
use crate::error::{CheckersError, CheckersResult};
use crate::movegen::playable_moves;
use crate::rules::{commit, continuation_captures, is_terminal, winner};
use crate::types::{Color, Move, Position};

/// What happened to the turn after a hop was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    /// The piece on this square must capture again.
    Continue(Position),
    /// The turn passed to the other side.
    Finished,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Color,
    chain: Option<Position>,
    turns: u32,
}

impl Game {
    /// New game from the standard layout, Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::initial(), Color::Black)
    }

    pub fn from_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            chain: None,
            turns: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Completed turns so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Square of the piece that is in the middle of a capture chain.
    pub fn pending_chain(&self) -> Option<Position> {
        self.chain
    }

    /// Moves the side to move may choose from right now.
    pub fn legal_choices(&self) -> Vec<Move> {
        match self.chain {
            Some(at) => continuation_captures(&self.board, at),
            None => playable_moves(&self.board, self.to_move),
        }
    }

    /// Plays one hop for the side to move.
    pub fn play(&mut self, mv: &Move) -> CheckersResult<TurnStatus> {
        if !self.legal_choices().contains(mv) {
            let reason = match self.chain {
                Some(_) => "the capturing piece must continue its chain",
                None => "not a legal move in this position",
            };
            return Err(CheckersError::InvalidMove {
                mv: mv.clone(),
                reason,
            });
        }

        self.board = commit(&self.board, mv);
        if mv.is_capture() && !continuation_captures(&self.board, mv.to).is_empty() {
            trace!(side = %self.to_move, at = %mv.to, "capture chain continues");
            self.chain = Some(mv.to);
            return Ok(TurnStatus::Continue(mv.to));
        }

        self.chain = None;
        self.to_move = self.to_move.other();
        self.turns += 1;
        Ok(TurnStatus::Finished)
    }

    pub fn is_over(&self) -> bool {
        self.chain.is_none() && is_terminal(&self.board, self.to_move)
    }

    /// The winner once the game is over.
    pub fn outcome(&self) -> Option<Color> {
        if self.chain.is_some() {
            return None;
        }
        winner(&self.board, self.to_move)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
