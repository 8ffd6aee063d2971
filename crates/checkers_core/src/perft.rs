use crate::{board::Board, movegen::playable_moves, rules::commit, types::Color};

/// Pure perft node count over the search tree.
///
/// Each ply plays one entry of the side's playable list (captures when any
/// exist) and hands the move to the opponent, the same expansion the
/// minimax search uses.
pub fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = playable_moves(board, side);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|mv| perft(&commit(board, mv), side.other(), depth - 1))
        .sum()
}

/// Perft split by root move, handy for tracking down generator differences.
pub fn perft_divide(board: &Board, side: Color, depth: u8) -> Vec<(crate::types::Move, u64)> {
    playable_moves(board, side)
        .into_iter()
        .map(|mv| {
            let nodes = perft(&commit(board, &mv), side.other(), depth.saturating_sub(1));
            (mv, nodes)
        })
        .collect()
}
