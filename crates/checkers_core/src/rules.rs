//! Move application and game-end rules.

use crate::board::Board;
use crate::error::{CheckersError, CheckersResult};
use crate::movegen::{legal_moves_and_captures, piece_captures};
use crate::types::*;

/// Plays `mv` and returns the resulting board.
///
/// The move must be geometrically reachable by the piece on `mv.from`: one
/// step in one of its directions, or a chain of jumps over enemy pieces
/// (listed in `mv.captured`) onto empty squares ending on `mv.to`. Whether
/// the move is allowed this turn (mandatory captures, side to move) is
/// checked by [`play_move`].
///
/// A man is crowned when it lands on the opponent's back rank or when any
/// of the pieces it captured was a king.
pub fn apply_move(board: &Board, mv: &Move) -> CheckersResult<Board> {
    validate(board, mv)?;
    Ok(commit(board, mv))
}

fn validate(board: &Board, mv: &Move) -> CheckersResult<()> {
    let piece = board
        .get(mv.from)
        .ok_or_else(|| CheckersError::invalid(mv, "origin is off the board"))?;
    let color = piece
        .owner()
        .ok_or_else(|| CheckersError::invalid(mv, "origin square is empty"))?;
    if !mv.to.is_on_board() {
        return Err(CheckersError::invalid(mv, "destination is off the board"));
    }

    // The mover has left its origin, so a king may close a loop onto it.
    let mut scratch = *board;
    scratch.set(mv.from, Square::Empty);

    if mv.captured.is_empty() {
        let step = (mv.to.row - mv.from.row, mv.to.col - mv.from.col);
        if !piece.directions().contains(&step) {
            return Err(CheckersError::invalid(
                mv,
                "destination is not a diagonal step this piece may take",
            ));
        }
        if !scratch.get(mv.to).is_some_and(Square::is_empty) {
            return Err(CheckersError::invalid(mv, "destination is occupied"));
        }
        return Ok(());
    }

    let mut at = mv.from;
    for &over in &mv.captured {
        if !over.is_on_board() {
            return Err(CheckersError::invalid(mv, "captured square is off the board"));
        }
        let dir = (over.row - at.row, over.col - at.col);
        if !piece.directions().contains(&dir) {
            return Err(CheckersError::invalid(
                mv,
                "captured piece is not diagonally ahead of the jumping piece",
            ));
        }
        if !scratch.get(over).is_some_and(|sq| sq.is_enemy_of(color)) {
            return Err(CheckersError::invalid(mv, "jumped square holds no enemy piece"));
        }
        let landing = over
            .offset(dir.0, dir.1)
            .ok_or_else(|| CheckersError::invalid(mv, "jump lands off the board"))?;
        if !scratch.get(landing).is_some_and(Square::is_empty) {
            return Err(CheckersError::invalid(mv, "jump lands on an occupied square"));
        }
        scratch.set(over, Square::Empty);
        at = landing;
    }
    if at != mv.to {
        return Err(CheckersError::invalid(
            mv,
            "capture chain does not end on the destination",
        ));
    }
    Ok(())
}

/// Applies a move already known to be legal, e.g. one produced by the
/// generator.
pub(crate) fn commit(board: &Board, mv: &Move) -> Board {
    let piece = board.get(mv.from).unwrap_or_default();
    let mut next = *board;
    next.set(mv.from, Square::Empty);
    for &c in &mv.captured {
        next.set(c, Square::Empty);
    }

    // Captured kinds are read from the board before the move.
    let crowned = piece.is_man()
        && (piece.owner().map(Color::promotion_row) == Some(mv.to.row)
            || mv
                .captured
                .iter()
                .any(|&c| board.get(c).is_some_and(Square::is_king)));
    next.set(mv.to, if crowned { piece.promote() } else { piece });
    next
}

/// Plays `mv` for `side`, enforcing turn ownership and mandatory capture.
pub fn play_move(board: &Board, side: Color, mv: &Move) -> CheckersResult<Board> {
    match board.get(mv.from) {
        None => return Err(CheckersError::invalid(mv, "origin is off the board")),
        Some(Square::Empty) => return Err(CheckersError::invalid(mv, "origin square is empty")),
        Some(sq) if sq.owner() != Some(side) => {
            return Err(CheckersError::invalid(mv, "piece belongs to the other side"))
        }
        Some(_) => {}
    }

    let legal = legal_moves_and_captures(board, side);
    if !legal.playable().contains(mv) {
        let reason = if legal.has_captures() && !mv.is_capture() {
            "a capture is available and must be taken"
        } else {
            "not a legal move in this position"
        };
        return Err(CheckersError::invalid(mv, reason));
    }
    apply_move(board, mv)
}

/// Captures available to the piece standing on `landing`, judged by its
/// current kind. Non-empty after a capture means the turn continues.
pub fn continuation_captures(board: &Board, landing: Position) -> Vec<Move> {
    piece_captures(board, landing)
}

/// One side has no pieces left.
pub fn is_decided(board: &Board) -> bool {
    board.piece_count(Color::Black) == 0 || board.piece_count(Color::White) == 0
}

/// The game is over: a side is wiped out, or `to_move` cannot move.
pub fn is_terminal(board: &Board, to_move: Color) -> bool {
    is_decided(board) || legal_moves_and_captures(board, to_move).is_empty()
}

/// The winner of a finished game, `None` while play continues.
///
/// A side with no pieces loses; otherwise the side to move loses when it
/// has neither a step nor a capture. The check is symmetric in colour.
pub fn winner(board: &Board, to_move: Color) -> Option<Color> {
    let black = board.piece_count(Color::Black);
    let white = board.piece_count(Color::White);
    match (black, white) {
        (0, 0) => None,
        (0, _) => Some(Color::White),
        (_, 0) => Some(Color::Black),
        _ if legal_moves_and_captures(board, to_move).is_empty() => Some(to_move.other()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
