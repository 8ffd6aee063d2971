use super::*;

fn board(layout: &str) -> Board {
    Board::from_layout(layout).unwrap()
}

fn p(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

fn assert_invalid(result: CheckersResult<Board>) {
    assert!(
        matches!(result, Err(CheckersError::InvalidMove { .. })),
        "expected InvalidMove, got {result:?}"
    );
}

#[test]
fn test_apply_simple_move_leaves_input_untouched() {
    let b = Board::initial();
    let mv = Move::new(p(5, 0), p(4, 1));
    let next = apply_move(&b, &mv).unwrap();

    assert_eq!(next.get(p(5, 0)), Some(Square::Empty));
    assert_eq!(next.get(p(4, 1)), Some(Square::BlackMan));
    assert_eq!(next.total_pieces(), 24);
    assert_eq!(b, Board::initial());
}

#[test]
fn test_capture_removes_exactly_the_captured_pieces() {
    let b = board("8/8/8/4w3/8/2w5/1b6/8");
    let mv = Move::capture(p(6, 1), p(2, 5), vec![p(5, 2), p(3, 4)]);
    let next = apply_move(&b, &mv).unwrap();

    assert_eq!(next.total_pieces(), b.total_pieces() - mv.captured.len());
    assert_eq!(next.piece_count(Color::White), 0);
    assert_eq!(next.get(p(2, 5)), Some(Square::BlackMan));
    assert_eq!(next.get(p(6, 1)), Some(Square::Empty));
}

#[test]
fn test_back_rank_promotion() {
    let b = board("8/2b5/8/8/8/8/8/8");
    let next = apply_move(&b, &Move::new(p(1, 2), p(0, 1))).unwrap();
    assert_eq!(next.get(p(0, 1)), Some(Square::BlackKing));

    let b = board("8/8/8/8/8/8/5w2/8");
    let next = apply_move(&b, &Move::new(p(6, 5), p(7, 6))).unwrap();
    assert_eq!(next.get(p(7, 6)), Some(Square::WhiteKing));
}

#[test]
fn test_regicide_promotion_off_back_rank() {
    let b = board("8/8/8/8/3W4/2b5/8/8");
    let mv = Move::capture(p(5, 2), p(3, 4), vec![p(4, 3)]);
    let next = apply_move(&b, &mv).unwrap();
    assert_eq!(next.get(p(3, 4)), Some(Square::BlackKing));
    assert_eq!(next.piece_count(Color::White), 0);

    // Capturing a man away from the back rank does not crown
    let b = board("8/8/8/8/3w4/2b5/8/8");
    let next = apply_move(&b, &mv).unwrap();
    assert_eq!(next.get(p(3, 4)), Some(Square::BlackMan));
}

#[test]
fn test_regicide_at_end_of_chain_crowns() {
    // First jump takes a man, second takes a king; row 2 is not the back rank
    let b = board("8/8/8/4W3/8/2w5/1b6/8");
    let mv = Move::capture(p(6, 1), p(2, 5), vec![p(5, 2), p(3, 4)]);
    let next = apply_move(&b, &mv).unwrap();
    assert_eq!(next.get(p(2, 5)), Some(Square::BlackKing));
    assert_eq!(next.piece_count(Color::White), 0);
}

#[test]
fn test_apply_rejects_off_board_captured_square() {
    let b = board("8/8/8/8/3w4/2b5/8/8");
    assert_invalid(apply_move(&b, &Move::capture(p(5, 2), p(3, 4), vec![p(-128, 0)])));
    assert_invalid(apply_move(&b, &Move::capture(p(5, 2), p(3, 4), vec![p(4, 127)])));
    assert_invalid(apply_move(
        &b,
        &Move::capture(p(5, 2), p(3, 4), vec![p(4, 3), p(i8::MIN, i8::MAX)]),
    ));
}

#[test]
fn test_king_is_never_demoted() {
    let b = board("8/8/8/8/8/8/8/W7");
    let next = apply_move(&b, &Move::new(p(7, 0), p(6, 1))).unwrap();
    assert_eq!(next.get(p(6, 1)), Some(Square::WhiteKing));
}

#[test]
fn test_apply_rejects_bad_geometry() {
    let b = board("8/8/8/8/3w4/2b5/8/8");
    // Empty origin
    assert_invalid(apply_move(&b, &Move::new(p(4, 1), p(3, 0))));
    // Men cannot step backward
    assert_invalid(apply_move(&b, &Move::new(p(5, 2), p(6, 1))));
    // Two squares without a capture
    assert_invalid(apply_move(&b, &Move::new(p(5, 2), p(3, 0))));
    // Onto an occupied square
    assert_invalid(apply_move(&b, &Move::new(p(5, 2), p(4, 3))));
    // Claimed capture over an empty square
    assert_invalid(apply_move(&b, &Move::capture(p(5, 2), p(3, 0), vec![p(4, 1)])));
    // Chain that does not end where it claims
    assert_invalid(apply_move(&b, &Move::capture(p(5, 2), p(3, 0), vec![p(4, 3)])));
    // Off-board destination
    assert_invalid(apply_move(&b, &Move::new(p(5, 2), p(4, 9))));
}

#[test]
fn test_apply_rejects_capture_of_own_piece() {
    let b = board("8/8/8/8/3b4/2b5/8/8");
    assert_invalid(apply_move(&b, &Move::capture(p(5, 2), p(3, 4), vec![p(4, 3)])));
}

#[test]
fn test_play_move_enforces_mandatory_capture() {
    let b = board("8/8/8/8/3w4/2b5/8/8");
    let quiet = Move::new(p(5, 2), p(4, 1));
    // Geometrically fine on its own
    assert!(apply_move(&b, &quiet).is_ok());

    match play_move(&b, Color::Black, &quiet) {
        Err(CheckersError::InvalidMove { reason, .. }) => {
            assert_eq!(reason, "a capture is available and must be taken");
        }
        other => panic!("expected InvalidMove, got {other:?}"),
    }

    let jump = Move::capture(p(5, 2), p(3, 4), vec![p(4, 3)]);
    let next = play_move(&b, Color::Black, &jump).unwrap();
    assert_eq!(next.piece_count(Color::White), 0);
}

#[test]
fn test_play_move_rejects_other_sides_piece() {
    let b = Board::initial();
    assert_invalid(play_move(&b, Color::White, &Move::new(p(5, 0), p(4, 1))));
    assert_invalid(play_move(&b, Color::Black, &Move::new(p(4, 1), p(3, 0))));
    assert!(play_move(&b, Color::Black, &Move::new(p(5, 0), p(4, 1))).is_ok());
}

#[test]
fn test_promotion_mid_chain_opens_continuation() {
    let b = board("8/2w1w3/5b2/8/8/8/8/8");
    // As a man the piece sees a single jump
    let caps = crate::movegen::piece_captures(&b, p(2, 5));
    assert_eq!(caps, vec![Move::capture(p(2, 5), p(0, 3), vec![p(1, 4)])]);

    let next = apply_move(&b, &caps[0]).unwrap();
    assert_eq!(next.get(p(0, 3)), Some(Square::BlackKing));
    // Crowned, it may now jump backward
    assert_eq!(
        continuation_captures(&next, p(0, 3)),
        vec![Move::capture(p(0, 3), p(2, 1), vec![p(1, 2)])]
    );
}

#[test]
fn test_terminal_when_side_wiped_out() {
    let b = board("8/8/8/8/8/8/1b6/8");
    assert!(is_decided(&b));
    assert!(is_terminal(&b, Color::Black));
    assert!(is_terminal(&b, Color::White));
    assert_eq!(winner(&b, Color::White), Some(Color::Black));
    assert_eq!(winner(&b, Color::Black), Some(Color::Black));
}

#[test]
fn test_blocked_side_to_move_loses() {
    let b = board("3w4/w1w5/1b6/8/8/8/8/8");
    assert!(!is_decided(&b));
    assert!(is_terminal(&b, Color::Black));
    assert_eq!(winner(&b, Color::Black), Some(Color::White));
    // Same board with White to move is still in play
    assert!(!is_terminal(&b, Color::White));
    assert_eq!(winner(&b, Color::White), None);
}

#[test]
fn test_blocked_white_loses_too() {
    let b = board("8/8/8/8/8/6w1/5b1b/4b3");
    assert!(is_terminal(&b, Color::White));
    assert_eq!(winner(&b, Color::White), Some(Color::Black));
}

#[test]
fn test_initial_board_not_terminal() {
    let b = Board::initial();
    assert!(!is_terminal(&b, Color::Black));
    assert_eq!(winner(&b, Color::Black), None);
}
