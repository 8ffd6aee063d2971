use crate::{board::Board, types::Color};

/// Material evaluation from `maximizer`'s point of view.
///
/// Each piece counts 1 and each king a further 0.5:
/// `(own - opponent pieces) + 0.5 * (own - opponent kings)`.
/// Positive is good for `maximizer`. Position and mobility are ignored.
pub fn evaluate(board: &Board, maximizer: Color) -> f64 {
    let opponent = maximizer.other();
    let pieces = board.piece_count(maximizer) as f64 - board.piece_count(opponent) as f64;
    let kings = board.king_count(maximizer) as f64 - board.king_count(opponent) as f64;
    pieces + 0.5 * kings
}
