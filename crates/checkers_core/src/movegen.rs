use crate::{board::Board, types::*};

/// All moves available to one side, split into simple steps and captures.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalMoves {
    pub moves: Vec<Move>,
    pub captures: Vec<Move>,
}

impl LegalMoves {
    /// The moves the side may actually choose from: captures are mandatory
    /// whenever any exist.
    pub fn playable(&self) -> &[Move] {
        if self.captures.is_empty() {
            &self.moves
        } else {
            &self.captures
        }
    }

    pub fn into_playable(self) -> Vec<Move> {
        if self.captures.is_empty() {
            self.moves
        } else {
            self.captures
        }
    }

    pub fn has_captures(&self) -> bool {
        !self.captures.is_empty()
    }

    /// True when the side can neither step nor capture.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.captures.is_empty()
    }
}

/// Collects every simple move and capture entry of `side`, scanning the
/// board in row-major order.
pub fn legal_moves_and_captures(board: &Board, side: Color) -> LegalMoves {
    let mut out = LegalMoves::default();
    for (pos, _) in board.pieces(side) {
        gen_simple(board, pos, &mut out.moves);
        gen_captures(board, pos, &mut out.captures);
    }
    out
}

/// Shorthand for `legal_moves_and_captures(board, side).into_playable()`.
pub fn playable_moves(board: &Board, side: Color) -> Vec<Move> {
    legal_moves_and_captures(board, side).into_playable()
}

/// Single diagonal steps onto empty squares. Men only step forward.
pub fn piece_simple_moves(board: &Board, pos: Position) -> Vec<Move> {
    let mut out = Vec::with_capacity(4);
    gen_simple(board, pos, &mut out);
    out
}

/// Every capture entry for the piece on `pos`: each single jump followed by
/// every chain that extends it, so both partial and complete chains are
/// listed.
pub fn piece_captures(board: &Board, pos: Position) -> Vec<Move> {
    let mut out = Vec::new();
    gen_captures(board, pos, &mut out);
    out
}

fn gen_simple(board: &Board, from: Position, out: &mut Vec<Move>) {
    let Some(piece) = board.get(from) else {
        return;
    };
    for &(dr, dc) in piece.directions() {
        if let Some(to) = from.offset(dr, dc) {
            if board.get(to) == Some(Square::Empty) {
                out.push(Move::new(from, to));
            }
        }
    }
}

fn gen_captures(board: &Board, from: Position, out: &mut Vec<Move>) {
    let Some(piece) = board.get(from) else {
        return;
    };
    let Some(color) = piece.owner() else {
        return;
    };

    // Men jump in their stepping directions only; there is no backward
    // capture for men.
    for &(dr, dc) in piece.directions() {
        let Some(over) = from.offset(dr, dc) else {
            continue;
        };
        if !board.get(over).is_some_and(|sq| sq.is_enemy_of(color)) {
            continue;
        }
        let Some(landing) = over.offset(dr, dc) else {
            continue;
        };
        if board.get(landing) != Some(Square::Empty) {
            continue;
        }

        out.push(Move::capture(from, landing, vec![over]));

        // The piece keeps its pre-jump kind for the rest of the chain here;
        // a crowning jump is re-examined by the turn driver after applying.
        let mut next = *board;
        next.set(from, Square::Empty);
        next.set(over, Square::Empty);
        next.set(landing, piece);

        let mut further = Vec::new();
        gen_captures(&next, landing, &mut further);
        for mv in further {
            let mut captured = Vec::with_capacity(mv.captured.len() + 1);
            captured.push(over);
            captured.extend(mv.captured);
            out.push(Move::capture(from, mv.to, captured));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
