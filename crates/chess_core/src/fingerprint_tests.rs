use super::*;
use crate::types::PieceKind;

#[test]
fn test_keys_unique() {
    let mut seen = std::collections::HashSet::new();

    for color in 0..2 {
        for kind in 0..6 {
            for sq in 0..64 {
                assert!(seen.insert(KEYS.pieces[color][kind][sq]), "duplicate piece key");
            }
        }
    }
    assert!(seen.insert(KEYS.black_to_move));
    for key in KEYS.castling {
        assert!(seen.insert(key), "castling key collision");
    }
    for key in KEYS.en_passant {
        assert!(seen.insert(key), "en passant key collision");
    }
}

#[test]
fn test_same_position_same_fingerprint() {
    let a = Position::startpos();
    let b = Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.history(), [a.fingerprint()]);
}

#[test]
fn test_fingerprint_distinguishes_side_castling_and_en_passant() {
    let fp = |fen: &str| Position::from_fen(fen).unwrap().fingerprint();

    let base = fp("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");
    assert_ne!(
        base,
        fp("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 1")
    );
    assert_ne!(
        base,
        fp("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b Kkq - 0 1")
    );
    assert_ne!(
        base,
        fp("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
    );
}

#[test]
fn test_fingerprint_ignores_counters() {
    let a = Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
        .unwrap();
    let b = Position::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 6 5")
        .unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn test_piece_key_varies_by_square() {
    let piece = Piece::new(Color::White, PieceKind::Pawn);
    assert_ne!(KEYS.piece_key(piece, 0), KEYS.piece_key(piece, 1));
}
