use crate::board::Position;
use crate::types::*;

fn s(c: &str) -> u8 {
    coord_to_sq(c).unwrap()
}

fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from == s(from) && m.to == s(to))
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    // Starting position has 20 legal moves
    assert_eq!(pos.legal_moves(Color::White).len(), 20);
    assert_eq!(pos.legal_moves(Color::Black).len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let moves = pos.legal_moves(Color::White);
    assert_eq!(moves.len(), 48);
    assert!(has_move(&moves, "e1", "g1"));
    assert!(has_move(&moves, "e1", "c1"));
}

#[test]
fn test_moves_are_in_board_scan_order() {
    let pos = Position::startpos();
    let moves = pos.legal_moves(Color::White);
    let keys: Vec<(u8, u8)> = moves.iter().map(|m| (m.from, m.to)).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert_eq!(moves, pos.legal_moves(Color::White));
}

#[test]
fn test_legal_moves_never_expose_the_king() {
    let mut pos = Position::startpos();
    for ply in 0..80usize {
        if pos.is_game_over() {
            break;
        }
        let mover = pos.side_to_move();
        let moves = pos.legal_moves(mover);
        for mv in &moves {
            let mut child = pos.clone();
            child.apply_move(*mv).unwrap();
            assert!(
                !child.in_check(mover),
                "move {mv:?} left {mover:?} in check at ply {ply}"
            );
        }
        let pick = moves[(ply * 7 + 3) % moves.len()];
        pos.apply_move(pick).unwrap();
    }
}

#[test]
fn test_pinned_piece_cannot_move() {
    let pos = Position::from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w - - 0 1").unwrap();
    let moves = pos.legal_moves(Color::White);
    assert!(moves.iter().all(|m| m.from != s("e2")));

    let bishop = pos.piece_at(s("e2")).unwrap();
    let kind = pos.move_kind(bishop, s("e2"), s("d3")).unwrap();
    assert!(pos.would_expose_check(s("e2"), s("d3"), kind, Color::White));
}

#[test]
fn test_same_color_destination_is_invalid() {
    let pos = Position::startpos();
    let rook = pos.piece_at(s("a1")).unwrap();
    assert_eq!(pos.move_kind(rook, s("a1"), s("a2")), None);
    let knight = pos.piece_at(s("b1")).unwrap();
    assert_eq!(pos.move_kind(knight, s("b1"), s("d2")), None);
    assert_eq!(pos.move_kind(knight, s("b1"), s("c3")), Some(MoveKind::Normal));
}

#[test]
fn test_sliders_need_clear_path() {
    let pos = Position::startpos();
    let bishop = pos.piece_at(s("c1")).unwrap();
    assert_eq!(pos.move_kind(bishop, s("c1"), s("e3")), None);
    assert!(!pos.is_path_clear(s("c1"), s("e3")));
    assert!(pos.is_path_clear(s("c1"), s("d2")));
}

#[test]
fn test_pawn_double_step_needs_both_squares_empty() {
    let pos = Position::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").unwrap();
    let pawn = pos.piece_at(s("e2")).unwrap();
    assert_eq!(pos.move_kind(pawn, s("e2"), s("e4")), None);
    assert_eq!(pos.move_kind(pawn, s("e2"), s("e3")), None);
}

#[test]
fn test_castling_both_sides_available() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let king = pos.piece_at(s("e1")).unwrap();
    assert_eq!(
        pos.move_kind(king, s("e1"), s("g1")),
        Some(MoveKind::CastleKingside)
    );
    assert_eq!(
        pos.move_kind(king, s("e1"), s("c1")),
        Some(MoveKind::CastleQueenside)
    );
}

#[test]
fn test_castling_refused_through_attacked_square() {
    let pos = Position::from_fen("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1").unwrap();
    let moves = pos.legal_moves(Color::White);
    assert!(!has_move(&moves, "e1", "g1"));
    assert!(has_move(&moves, "e1", "c1"));
}

#[test]
fn test_castling_refused_onto_attacked_square() {
    let pos = Position::from_fen("r3k1r1/8/8/8/8/8/8/R3K2R w KQq - 0 1").unwrap();
    let king = pos.piece_at(s("e1")).unwrap();
    assert_eq!(pos.move_kind(king, s("e1"), s("g1")), None);
}

#[test]
fn test_castling_refused_when_gap_occupied() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1").unwrap();
    let moves = pos.legal_moves(Color::White);
    assert!(!has_move(&moves, "e1", "c1"));
    assert!(has_move(&moves, "e1", "g1"));
}

#[test]
fn test_castling_refused_out_of_check() {
    let pos = Position::from_fen("4k3/4r3/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let moves = pos.legal_moves(Color::White);
    assert!(!has_move(&moves, "e1", "g1"));
    assert!(!has_move(&moves, "e1", "c1"));
}

#[test]
fn test_castling_refused_despite_stale_flags() {
    // Flags claim rights, but the king is off its home square
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/R2K3R w KQ - 0 1").unwrap();
    let king = pos.piece_at(s("d1")).unwrap();
    assert_eq!(pos.move_kind(king, s("d1"), s("f1")), None);
    assert_eq!(pos.move_kind(king, s("d1"), s("b1")), None);

    // Flags claim rights, but there is no rook to castle with
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w K - 0 1").unwrap();
    let king = pos.piece_at(s("e1")).unwrap();
    assert_eq!(pos.move_kind(king, s("e1"), s("g1")), None);
}

#[test]
fn test_en_passant_kind() {
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let pawn = pos.piece_at(s("e5")).unwrap();
    assert_eq!(
        pos.move_kind(pawn, s("e5"), s("d6")),
        Some(MoveKind::EnPassant)
    );
    assert!(has_move(&pos.legal_moves(Color::White), "e5", "d6"));
}

#[test]
fn test_en_passant_never_takes_own_pawn() {
    let mut pos = Position::startpos();
    pos.apply(s("e2"), s("e4"), None).unwrap();
    assert_eq!(pos.en_passant(), Some(s("e3")));
    // d2 pawn stepping onto the target square would "capture" its own e4 pawn
    assert!(!has_move(&pos.legal_moves(Color::White), "d2", "e3"));
}

#[test]
fn test_en_passant_that_exposes_king_is_illegal() {
    // Taking en passant clears the fifth rank between the white king and the rook
    let pos = Position::from_fen("8/8/8/K2pP2r/8/8/8/4k3 w - d6 0 1").unwrap();
    let moves = pos.legal_moves(Color::White);
    assert!(!has_move(&moves, "e5", "d6"));
    assert!(has_move(&moves, "e5", "e6"));
}
