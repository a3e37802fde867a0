//! Material plus piece-square evaluation.

use chess_core::{Color, GameStatus, PieceKind, Position, Winner};

/// Score for a decided game, signed by the winner.
pub const MATE_SCORE: i32 = 100_000;

/// Material values in centipawns, indexed by PieceKind::idx().
/// Order: Pawn, Knight, Bishop, Rook, Queen, King
const PIECE_VALUES: [i32; 6] = [100, 320, 330, 500, 900, 0];

// Tables are written from White's side with rank 8 on the first row, so a
// white piece on `sq` reads entry `sq ^ 56` and a black piece reads `sq`.

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,   0,   0,   0,   0,  0,  0,
    50, 50,  50,  50,  50,  50, 50, 50,
    10, 10,  20,  30,  30,  20, 10, 10,
     5,  5,  10,  25,  25,  10,  5,  5,
     0,  0,   0,  20,  20,   0,  0,  0,
     5, -5, -10,   0,   0, -10, -5,  5,
     5, 10,  10, -20, -20,  10, 10,  5,
     0,  0,   0,   0,   0,   0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50,
    -40, -20,   0,   0,   0,   0, -20, -40,
    -30,   0,  10,  15,  15,  10,   0, -30,
    -30,   5,  15,  20,  20,  15,   5, -30,
    -30,   0,  15,  20,  20,  15,   0, -30,
    -30,   5,  10,  15,  15,  10,   5, -30,
    -40, -20,   0,   5,   5,   0, -20, -40,
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20,
    -10,   0,   0,   0,   0,   0,   0, -10,
    -10,   0,   5,  10,  10,   5,   0, -10,
    -10,   5,   5,  10,  10,   5,   5, -10,
    -10,   0,  10,  10,  10,  10,   0, -10,
    -10,  10,  10,  10,  10,  10,  10, -10,
    -10,   5,   0,   0,   0,   0,   5, -10,
    -20, -10, -10, -10, -10, -10, -10, -20,
];

fn square_bonus(kind: PieceKind, color: Color, sq: u8) -> i32 {
    let table = match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        _ => return 0,
    };
    let idx = match color {
        Color::White => sq ^ 56,
        Color::Black => sq,
    };
    table[idx as usize]
}

/// Evaluates the position from White's perspective.
///
/// Returns a score in centipawns:
/// - Positive = good for White
/// - Negative = good for Black
/// - `±MATE_SCORE` once a side has won, 0 for any draw
pub fn evaluate(pos: &Position) -> i32 {
    if pos.status() != GameStatus::Active {
        return match pos.winner() {
            Some(Winner::White) => MATE_SCORE,
            Some(Winner::Black) => -MATE_SCORE,
            Some(Winner::Draw(_)) | None => 0,
        };
    }

    pos.board()
        .occupied()
        .map(|(sq, pc)| {
            let value = PIECE_VALUES[pc.kind.idx()] + square_bonus(pc.kind, pc.color, sq);
            match pc.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
