//! Attack detection.
//!
//! Kept separate from `move_kind` so that check detection never recurses into
//! castling logic: kings are tested by direct adjacency, pawns by their capture
//! diagonals, sliders by walking rays outward from the target.

use crate::board::{Board, Position};
use crate::types::*;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Board {
    /// True if any piece of color `by` could capture on `target`.
    pub fn is_attacked_by(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);
        let holds = |s: Option<u8>, kinds: &[PieceKind]| {
            s.and_then(|s| self.piece_at(s))
                .is_some_and(|pc| pc.color == by && kinds.contains(&pc.kind))
        };

        // An attacking pawn sits one rank behind the target, from its own point of view.
        let back = -by.forward();
        if holds(sq(tf - 1, tr + back), &[PieceKind::Pawn])
            || holds(sq(tf + 1, tr + back), &[PieceKind::Pawn])
        {
            return true;
        }

        if KNIGHT_OFFSETS
            .iter()
            .any(|(df, dr)| holds(sq(tf + df, tr + dr), &[PieceKind::Knight]))
        {
            return true;
        }

        if KING_OFFSETS
            .iter()
            .any(|(df, dr)| holds(sq(tf + df, tr + dr), &[PieceKind::King]))
        {
            return true;
        }

        let rays = [
            (&DIAGONALS, [PieceKind::Bishop, PieceKind::Queen]),
            (&ORTHOGONALS, [PieceKind::Rook, PieceKind::Queen]),
        ];
        for (dirs, sliders) in rays {
            for (df, dr) in dirs {
                let (mut f, mut r) = (tf + df, tr + dr);
                while let Some(s) = sq(f, r) {
                    if let Some(pc) = self.piece_at(s) {
                        if pc.color == by && sliders.contains(&pc.kind) {
                            return true;
                        }
                        break;
                    }
                    f += df;
                    r += dr;
                }
            }
        }

        false
    }
}

impl Position {
    /// True if the opponent of `defender` attacks `sq`.
    pub fn is_attacked(&self, sq: u8, defender: Color) -> bool {
        self.board.is_attacked_by(sq, defender.other())
    }

    /// A color without a king on the board is never in check.
    pub fn in_check(&self, c: Color) -> bool {
        match self.board.king_sq(c) {
            Some(k) => self.is_attacked(k, c),
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
