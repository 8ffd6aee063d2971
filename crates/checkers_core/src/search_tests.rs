use super::*;
use crate::types::Position;

fn board(layout: &str) -> Board {
    Board::from_layout(layout).unwrap()
}

fn p(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

/// Plain minimax without pruning, used as a reference for the pruned search.
fn reference_minimax(board: &Board, depth: u8, maximizing: bool, maximizer: Color) -> f64 {
    let to_move = if maximizing { maximizer } else { maximizer.other() };
    let moves = playable_moves(board, to_move);
    if depth == 0 || is_decided(board) || moves.is_empty() {
        return evaluate(board, maximizer);
    }
    let scores = moves.iter().map(|mv| {
        let next = apply_move(board, mv).unwrap();
        reference_minimax(&next, depth - 1, !maximizing, maximizer)
    });
    if maximizing {
        scores.fold(f64::NEG_INFINITY, f64::max)
    } else {
        scores.fold(f64::INFINITY, f64::min)
    }
}

#[test]
fn test_pruned_search_matches_reference() {
    let positions = [
        Board::initial().to_layout(),
        "8/8/8/2w1w3/8/2w5/1b6/8".to_string(),
        "8/8/8/8/3w4/8/5b2/b7".to_string(),
        ".w.w.w.w/w.w...w./.w.w.w.w/4w3/3b4/b.b...b./.b.b.b.b/b.b.b.b.".to_string(),
    ];
    for layout in positions {
        let b = board(&layout);
        for side in [Color::Black, Color::White] {
            for depth in 1..=4 {
                let candidates = playable_moves(&b, side);
                let mut stats = SearchStats::default();
                let (score, _) = minimax(
                    &b,
                    depth,
                    f64::NEG_INFINITY,
                    f64::INFINITY,
                    true,
                    side,
                    &candidates,
                    &mut stats,
                );
                assert_eq!(
                    score,
                    reference_minimax(&b, depth, true, side),
                    "score mismatch for {layout} ({side}) at depth {depth}"
                );
            }
        }
    }
}

#[test]
fn test_depth_zero_is_static_evaluation() {
    let b = board("W7/8/8/8/3w4/8/6b1/8");
    let candidates = playable_moves(&b, Color::White);
    let mut stats = SearchStats::default();
    let (score, mv) = minimax(
        &b,
        0,
        f64::NEG_INFINITY,
        f64::INFINITY,
        true,
        Color::White,
        &candidates,
        &mut stats,
    );
    assert_eq!(score, 1.5);
    assert!(mv.is_none());
    assert_eq!(stats.nodes, 1);
}

#[test]
fn test_prefers_longer_capture_chain() {
    let b = board("8/8/8/2w1w3/8/2w5/1b6/8");
    let mv = best_move(&b, 1, Color::Black).unwrap();
    // Both double jumps score the same; the first generated one wins
    assert_eq!(mv, Move::capture(p(6, 1), p(2, 1), vec![p(5, 2), p(3, 2)]));
}

#[test]
fn test_lookahead_avoids_hanging_a_piece() {
    let b = board("8/8/8/8/3w4/8/5b2/b7");
    // One ply sees no difference and keeps the first move, which hangs
    assert_eq!(best_move(&b, 1, Color::Black), Some(Move::new(p(6, 5), p(5, 4))));
    // Two plies see the recapture
    assert_eq!(best_move(&b, 2, Color::Black), Some(Move::new(p(6, 5), p(5, 6))));
}

#[test]
fn test_search_is_deterministic() {
    let b = Board::initial();
    let first = best_move(&b, 5, Color::Black);
    let second = best_move(&b, 5, Color::Black);
    assert!(first.is_some());
    assert_eq!(first, second);

    let white_first = best_move(&b, 3, Color::White);
    assert_eq!(white_first, Some(Move::new(p(2, 1), p(3, 0))));
    assert_eq!(white_first, best_move(&b, 3, Color::White));
}

#[test]
fn test_no_move_for_blocked_side() {
    let b = board("3w4/w1w5/1b6/8/8/8/8/8");
    assert_eq!(best_move(&b, 3, Color::Black), None);
    assert!(best_turn(&b, 3, Color::Black).is_empty());
}

#[test]
fn test_best_move_respects_mandatory_capture() {
    // A quiet move exists but the capture is forced
    let b = board("8/8/8/8/3w4/2b5/8/8");
    let mv = best_move(&b, 3, Color::Black).unwrap();
    assert!(mv.is_capture());
}

#[test]
fn test_best_turn_continues_after_crowning() {
    let b = board("8/2w1w3/5b2/8/8/8/8/8");
    let turn = best_turn(&b, 3, Color::Black);
    assert_eq!(
        turn,
        vec![
            Move::capture(p(2, 5), p(0, 3), vec![p(1, 4)]),
            Move::capture(p(0, 3), p(2, 1), vec![p(1, 2)]),
        ]
    );
}

#[test]
fn test_best_turn_single_step() {
    let b = Board::initial();
    let turn = best_turn(&b, 3, Color::White);
    assert_eq!(turn.len(), 1);
    assert!(!turn[0].is_capture());
}

#[test]
fn test_best_move_among_validates_candidates() {
    let b = Board::initial();
    let bogus = Move::new(p(5, 0), p(3, 2));
    assert!(best_move_among(&b, 3, Color::Black, &[bogus]).is_err());

    // A legal step for the opponent is not a candidate for Black
    let theirs = Move::new(p(2, 1), p(3, 0));
    assert!(matches!(
        best_move_among(&b, 2, Color::Black, &[theirs.clone()]),
        Err(CheckersError::InvalidMove { .. })
    ));
    assert!(best_move_among(&b, 2, Color::White, &[theirs]).is_ok());

    // Empty origin
    let empty = Move::new(p(4, 1), p(3, 0));
    assert!(best_move_among(&b, 2, Color::Black, &[empty]).is_err());

    let only = Move::new(p(5, 6), p(4, 7));
    let outcome = best_move_among(&b, 3, Color::Black, std::slice::from_ref(&only)).unwrap();
    assert_eq!(outcome.best_move, Some(only));
    assert!(outcome.nodes > 1);
}

#[test]
fn test_best_move_among_depth_zero_is_static() {
    let b = Board::initial();
    let candidates = playable_moves(&b, Color::Black);
    let outcome = best_move_among(&b, 0, Color::Black, &candidates).unwrap();
    assert_eq!(outcome.best_move, None);
    assert_eq!(outcome.score, 0.0);
    assert_eq!(outcome.nodes, 1);
}
