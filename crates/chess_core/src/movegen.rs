//! Move classification and legal move generation.
//!
//! `move_kind` answers "may this piece go there?" for a single candidate move
//! using piece geometry and occupancy only. `would_expose_check` is the
//! legality filter layered on top; `legal_moves` combines the two.

use crate::attacks::{KING_OFFSETS, KNIGHT_OFFSETS};
use crate::board::Position;
use crate::types::*;

impl Position {
    /// Category of `piece` moving `from -> to`, assuming it is that piece's turn.
    ///
    /// Does not consider whether the mover's own king is left in check.
    /// Returns `None` for anything geometrically impossible, blocked, or landing
    /// on a piece of the same color.
    pub fn move_kind(&self, piece: Piece, from: u8, to: u8) -> Option<MoveKind> {
        if from >= 64 || to >= 64 || from == to {
            return None;
        }
        let target = self.board.piece_at(to);
        if target.is_some_and(|t| t.color == piece.color) {
            return None;
        }

        let df = file_of(to) - file_of(from);
        let dr = rank_of(to) - rank_of(from);

        match piece.kind {
            PieceKind::Pawn => self.pawn_kind(piece.color, from, to, df, dr, target),
            PieceKind::Knight => KNIGHT_OFFSETS
                .contains(&(df, dr))
                .then_some(MoveKind::Normal),
            PieceKind::Bishop => {
                (df.abs() == dr.abs() && self.is_path_clear(from, to)).then_some(MoveKind::Normal)
            }
            PieceKind::Rook => {
                ((df == 0 || dr == 0) && self.is_path_clear(from, to)).then_some(MoveKind::Normal)
            }
            PieceKind::Queen => {
                let aligned = df == 0 || dr == 0 || df.abs() == dr.abs();
                (aligned && self.is_path_clear(from, to)).then_some(MoveKind::Normal)
            }
            PieceKind::King => {
                if KING_OFFSETS.contains(&(df, dr)) {
                    Some(MoveKind::Normal)
                } else if dr == 0 && df.abs() == 2 {
                    self.castle_kind(piece.color, from, to, df > 0)
                } else {
                    None
                }
            }
        }
    }

    fn pawn_kind(
        &self,
        c: Color,
        from: u8,
        to: u8,
        df: i8,
        dr: i8,
        target: Option<Piece>,
    ) -> Option<MoveKind> {
        let dir = c.forward();
        if df == 0 {
            if target.is_some() {
                return None;
            }
            if dr == dir {
                return Some(MoveKind::Normal);
            }
            let over = sq(file_of(from), rank_of(from) + dir)?;
            if dr == 2 * dir && rank_of(from) == c.pawn_rank() && self.board.piece_at(over).is_none()
            {
                return Some(MoveKind::Normal);
            }
            return None;
        }

        if df.abs() != 1 || dr != dir {
            return None;
        }
        if target.is_some() {
            return Some(MoveKind::Normal);
        }
        if self.en_passant != Some(to) {
            return None;
        }
        let passed = sq(file_of(to), rank_of(from))?;
        match self.board.piece_at(passed) {
            Some(p) if p.color != c && p.kind == PieceKind::Pawn => Some(MoveKind::EnPassant),
            _ => None,
        }
    }

    /// Two-square king hop. Requires the right, king and rook on their home
    /// squares, an empty gap, no current check, and safe transit and landing squares.
    fn castle_kind(&self, c: Color, from: u8, to: u8, kingside: bool) -> Option<MoveKind> {
        let home = match c {
            Color::White => 4u8,
            Color::Black => 60u8,
        };
        if from != home || !self.castling.allows(c, kingside) {
            return None;
        }
        let rook_sq = if kingside { home + 3 } else { home - 4 };
        if self.board.piece_at(rook_sq) != Some(Piece::new(c, PieceKind::Rook)) {
            return None;
        }
        if !self.is_path_clear(from, rook_sq) || self.in_check(c) {
            return None;
        }
        let transit = if kingside { home + 1 } else { home - 1 };
        if self.is_attacked(transit, c) || self.is_attacked(to, c) {
            return None;
        }
        Some(if kingside {
            MoveKind::CastleKingside
        } else {
            MoveKind::CastleQueenside
        })
    }

    /// True when every square strictly between `from` and `to` is empty.
    /// The squares must share a rank, file or diagonal.
    pub fn is_path_clear(&self, from: u8, to: u8) -> bool {
        let sf = (file_of(to) - file_of(from)).signum();
        let sr = (rank_of(to) - rank_of(from)).signum();
        let (mut f, mut r) = (file_of(from) + sf, rank_of(from) + sr);
        while let Some(s) = sq(f, r) {
            if s == to {
                return true;
            }
            if self.board.piece_at(s).is_some() {
                return false;
            }
            f += sf;
            r += sr;
        }
        false
    }

    /// Plays the move on a scratch copy of the grid and reports whether
    /// `color`'s king is attacked afterwards.
    pub fn would_expose_check(&self, from: u8, to: u8, kind: MoveKind, color: Color) -> bool {
        let mut scratch = self.board;
        scratch.relocate(from, to, kind);
        match scratch.king_sq(color) {
            Some(k) => scratch.is_attacked_by(k, color.other()),
            None => false,
        }
    }

    /// All legal moves for `color`, in board-scan order of origin then destination.
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        self.legal_moves_into(color, &mut out);
        out
    }

    /// Generate legal moves into the provided buffer, reusing it across calls.
    pub fn legal_moves_into(&self, color: Color, out: &mut Vec<Move>) {
        out.clear();
        for (from, piece) in self.board.occupied().filter(|(_, p)| p.color == color) {
            for to in 0..64u8 {
                if let Some(kind) = self.move_kind(piece, from, to)
                    && !self.would_expose_check(from, to, kind, color)
                {
                    out.push(Move::new(from, to));
                }
            }
        }
    }

    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.board
            .occupied()
            .filter(|(_, p)| p.color == color)
            .any(|(from, piece)| {
                (0..64u8).any(|to| {
                    self.move_kind(piece, from, to)
                        .is_some_and(|kind| !self.would_expose_check(from, to, kind, color))
                })
            })
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
