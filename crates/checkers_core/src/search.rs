//! Minimax search with alpha-beta pruning

use tracing::{debug, trace};

use crate::board::Board;
use crate::error::{CheckersError, CheckersResult};
use crate::eval::evaluate;
use crate::movegen::playable_moves;
use crate::rules::{apply_move, commit, continuation_captures, is_decided};
use crate::types::{Color, Move, Square};

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, the root included
    pub nodes: u64,
}

/// Result of a root search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Best candidate found (None if there was nothing to choose from)
    pub best_move: Option<Move>,
    /// Score of `best_move` from the searching side's point of view
    pub score: f64,
    pub nodes: u64,
}

/// Recursive minimax with alpha-beta pruning.
///
/// `candidates` are the moves of the side to move at this node, which is
/// `maximizer` when `maximizing` and its opponent otherwise. They must come
/// from the move generator. Leaves are scored with [`evaluate`] from
/// `maximizer`'s point of view whoever is to move.
///
/// Ties keep the first candidate reaching the best score, so results follow
/// generator order and are fully deterministic.
#[allow(clippy::too_many_arguments)]
pub fn minimax(
    board: &Board,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    maximizer: Color,
    candidates: &[Move],
    stats: &mut SearchStats,
) -> (f64, Option<Move>) {
    stats.nodes += 1;

    if depth == 0 || is_decided(board) || candidates.is_empty() {
        return (evaluate(board, maximizer), None);
    }

    let replier = if maximizing {
        maximizer.other()
    } else {
        maximizer
    };
    let mut best_move = None;

    if maximizing {
        let mut best = f64::NEG_INFINITY;
        for mv in candidates {
            let next = commit(board, mv);
            let replies = playable_moves(&next, replier);
            let (score, _) = minimax(&next, depth - 1, alpha, beta, false, maximizer, &replies, stats);
            if score > best {
                best = score;
                best_move = Some(mv.clone());
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        (best, best_move)
    } else {
        let mut best = f64::INFINITY;
        for mv in candidates {
            let next = commit(board, mv);
            let replies = playable_moves(&next, replier);
            let (score, _) = minimax(&next, depth - 1, alpha, beta, true, maximizer, &replies, stats);
            if score < best {
                best = score;
                best_move = Some(mv.clone());
            }
            beta = beta.min(score);
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        (best, best_move)
    }
}

fn search_root(board: &Board, depth: u8, side: Color, candidates: &[Move]) -> SearchOutcome {
    let mut stats = SearchStats::default();
    let (score, best_move) = minimax(
        board,
        depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        true,
        side,
        candidates,
        &mut stats,
    );
    debug!(
        %side,
        depth,
        candidates = candidates.len(),
        nodes = stats.nodes,
        score,
        best = %best_move.as_ref().map(|m| m.to_string()).unwrap_or_default(),
        "search finished"
    );
    SearchOutcome {
        best_move,
        score,
        nodes: stats.nodes,
    }
}

/// Searches `candidates` for `side`, maximizing its material.
///
/// Candidates supplied by the caller are validated against the board first;
/// one that moves a piece `side` does not own, or is otherwise unplayable,
/// is reported as `InvalidMove`.
///
/// Unlike [`best_move`], depth 0 is not clamped: it returns the static
/// evaluation and no move.
pub fn best_move_among(
    board: &Board,
    depth: u8,
    side: Color,
    candidates: &[Move],
) -> CheckersResult<SearchOutcome> {
    for mv in candidates {
        if board.get(mv.from).and_then(Square::owner) != Some(side) {
            return Err(CheckersError::invalid(mv, "piece belongs to the other side"));
        }
        apply_move(board, mv)?;
    }
    Ok(search_root(board, depth, side, candidates))
}

/// The move `side` should play, honouring mandatory captures.
///
/// Returns `None` when `side` has no move at all. A depth of zero is searched
/// as one ply so that a move is still chosen.
pub fn best_move(board: &Board, depth: u8, side: Color) -> Option<Move> {
    let candidates = playable_moves(board, side);
    if candidates.is_empty() {
        return None;
    }
    search_root(board, depth.max(1), side, &candidates).best_move
}

/// A whole turn for `side`, one hop at a time.
///
/// After every capture the piece's continuation captures from its landing
/// square (judged by its kind after the hop, so a freshly crowned piece
/// continues as a king) are searched afresh and the best one is played,
/// until none remain. Empty when `side` cannot move.
pub fn best_turn(board: &Board, depth: u8, side: Color) -> Vec<Move> {
    let mut hops = Vec::new();
    let Some(mut mv) = best_move(board, depth, side) else {
        return hops;
    };
    let mut current = *board;

    loop {
        current = commit(&current, &mv);
        let landing = mv.to;
        let captured = mv.is_capture();
        hops.push(mv);
        if !captured {
            break;
        }

        let continuations = continuation_captures(&current, landing);
        if continuations.is_empty() {
            break;
        }
        trace!(%landing, options = continuations.len(), "capture chain continues");
        match search_root(&current, depth.max(1), side, &continuations).best_move {
            Some(next) => mv = next,
            None => break,
        }
    }
    hops
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
