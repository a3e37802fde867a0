use super::*;

#[test]
fn test_startpos_is_balanced() {
    assert_eq!(evaluate(&Position::startpos()), 0);
}

#[test]
fn test_tables_mirror_for_black() {
    // Same structure reflected across the board, colors swapped
    let white = Position::from_fen("4k3/8/8/8/3P4/2N5/8/4K3 w - - 0 1").unwrap();
    let black = Position::from_fen("4k3/8/2n5/3p4/8/8/8/4K3 w - - 0 1").unwrap();
    assert_eq!(evaluate(&white), -evaluate(&black));
}

#[test]
fn test_material_and_square_bonus() {
    // Pawn on e4: 100 + 20. Knight on a1 for black's side is a corner: 320 - 50.
    let pos = Position::from_fen("4k3/8/8/8/4P3/8/8/n3K3 w - - 0 1").unwrap();
    assert_eq!(evaluate(&pos), 120 - 270);
}

#[test]
fn test_king_and_heavy_pieces_have_no_table() {
    let pos = Position::from_fen("r3k3/8/8/8/8/8/8/4K2Q w - - 0 1").unwrap();
    assert_eq!(evaluate(&pos), 900 - 500);
}

#[test]
fn test_terminal_scores() {
    let mated = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert_eq!(evaluate(&mated), MATE_SCORE);

    let stalemate = Position::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(evaluate(&stalemate), 0);

    let mut resigned = Position::startpos();
    resigned.resign(Color::White).unwrap();
    assert_eq!(evaluate(&resigned), -MATE_SCORE);
}
