use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MoveError;
use crate::notation::move_notation;
use crate::types::*;

/// Bare 8×8 grid, a1 = 0 .. h8 = 63.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board(pub [Option<Piece>; 64]);

impl Default for Board {
    fn default() -> Self {
        Board::EMPTY
    }
}

impl Board {
    pub const EMPTY: Board = Board([None; 64]);

    /// The standard starting array.
    pub fn standard() -> Self {
        let mut b = Board::EMPTY;
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            b.0[f] = Some(Piece::new(Color::White, kind));
            b.0[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.0[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            b.0[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        b
    }

    #[inline]
    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.0[sq as usize]
    }

    #[inline]
    pub fn set(&mut self, sq: u8, pc: Option<Piece>) {
        self.0[sq as usize] = pc;
    }

    #[inline]
    pub fn take(&mut self, sq: u8) -> Option<Piece> {
        self.0[sq as usize].take()
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        self.occupied()
            .find(|(_, pc)| pc.color == c && pc.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Occupied squares in board-scan order.
    pub fn occupied(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, pc)| pc.map(|p| (i as u8, p)))
    }

    pub fn piece_count(&self) -> usize {
        self.0.iter().filter(|pc| pc.is_some()).count()
    }

    /// Moves the piece on `from` to `to`, including the rook hop of a castle and
    /// the removal of the passed pawn for en passant. Returns whatever was captured.
    /// Promotion is not handled here.
    pub(crate) fn relocate(&mut self, from: u8, to: u8, kind: MoveKind) -> Option<Piece> {
        let moving = self.take(from);
        let mut captured = self.take(to);
        self.set(to, moving);
        match kind {
            MoveKind::Normal => {}
            MoveKind::CastleKingside => {
                let rook = self.take(from + 3);
                self.set(from + 1, rook);
            }
            MoveKind::CastleQueenside => {
                let rook = self.take(from - 4);
                self.set(from - 1, rook);
            }
            MoveKind::EnPassant => {
                if let Some(passed) = sq(file_of(to), rank_of(from)) {
                    captured = self.take(passed);
                }
            }
        }
        captured
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        wk: true,
        wq: true,
        bk: true,
        bq: true,
    };
    pub const NONE: CastlingRights = CastlingRights {
        wk: false,
        wq: false,
        bk: false,
        bq: false,
    };

    pub fn allows(&self, c: Color, kingside: bool) -> bool {
        match (c, kingside) {
            (Color::White, true) => self.wk,
            (Color::White, false) => self.wq,
            (Color::Black, true) => self.bk,
            (Color::Black, false) => self.bq,
        }
    }

    /// Flags in fixed order [wk, wq, bk, bq].
    pub fn flags(&self) -> [bool; 4] {
        [self.wk, self.wq, self.bk, self.bq]
    }

    /// Clears every right tied to `sq`: a king home square or a rook corner.
    /// Called for both the origin and the destination of each move, so a rook
    /// captured in its corner loses its right too. Rights are never re-granted.
    pub fn touch(&mut self, sq: u8) {
        match sq {
            0 => self.wq = false,
            4 => {
                self.wk = false;
                self.wq = false;
            }
            7 => self.wk = false,
            56 => self.bq = false,
            60 => {
                self.bk = false;
                self.bq = false;
            }
            63 => self.bk = false,
            _ => {}
        }
    }
}

/// Full game state: board plus everything needed for legality and termination.
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<u8>, // square behind a pawn that just advanced 2
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) ply: u32,
    pub(crate) status: GameStatus,
    pub(crate) winner: Option<Winner>,
    pub(crate) history: Vec<u64>,
    pub(crate) move_log: Vec<String>,
    pub(crate) captured: [Vec<PieceKind>; 2],
    pub(crate) last_move: Option<LastMove>,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_parts(Board::standard(), Color::White, CastlingRights::ALL, None, 0, 1)
    }

    /// Builds a fresh game from raw placement data. The starting fingerprint is
    /// recorded and termination is classified straight away.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<u8>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        let ply = fullmove_number.saturating_sub(1) * 2
            + if side_to_move == Color::Black { 1 } else { 0 };
        let mut p = Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
            ply,
            status: GameStatus::Active,
            winner: None,
            history: Vec::new(),
            move_log: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            last_move: None,
        };
        p.history.push(p.fingerprint());
        p.classify_termination();
        p
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board.piece_at(sq)
    }
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }
    pub fn en_passant(&self) -> Option<u8> {
        self.en_passant
    }
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }
    pub fn ply(&self) -> u32 {
        self.ply
    }
    pub fn status(&self) -> GameStatus {
        self.status
    }
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }
    pub fn history(&self) -> &[u64] {
        &self.history
    }
    pub fn move_log(&self) -> &[String] {
        &self.move_log
    }
    /// Piece kinds captured from `c`, in capture order.
    pub fn captured(&self, c: Color) -> &[PieceKind] {
        &self.captured[c.idx()]
    }
    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Plays `from -> to` for the side to move. A pawn reaching the last rank
    /// becomes `promotion`, or a queen when that is absent or not a valid target.
    ///
    /// On `Err` nothing about the position has changed.
    pub fn apply(
        &mut self,
        from: u8,
        to: u8,
        promotion: Option<PieceKind>,
    ) -> Result<(), MoveError> {
        let kind = self.check_move(from, to).inspect_err(|e| {
            debug!(from, to, error = %e, "move rejected");
        })?;
        self.commit(from, to, kind, promotion);
        Ok(())
    }

    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.apply(mv.from, mv.to, mv.promo)
    }

    fn check_move(&self, from: u8, to: u8) -> Result<MoveKind, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver(self.status));
        }
        if from >= 64 || to >= 64 {
            return Err(MoveError::OffBoard);
        }
        let piece = self.board.piece_at(from).ok_or(MoveError::EmptySquare(from))?;
        if piece.color != self.side_to_move {
            return Err(MoveError::WrongSide {
                piece: piece.color,
                to_move: self.side_to_move,
            });
        }
        let kind = self
            .move_kind(piece, from, to)
            .ok_or(MoveError::Illegal { from, to })?;
        if self.would_expose_check(from, to, kind, piece.color) {
            return Err(MoveError::ExposesKing { from, to });
        }
        Ok(kind)
    }

    /// Performs an already validated move and every bookkeeping step that follows it.
    pub(crate) fn commit(
        &mut self,
        from: u8,
        to: u8,
        kind: MoveKind,
        promotion: Option<PieceKind>,
    ) {
        let Some(moved) = self.board.piece_at(from) else {
            return;
        };
        let is_capture = self.board.piece_at(to).is_some() || kind == MoveKind::EnPassant;
        let notation = move_notation(moved, from, to, is_capture, kind);

        let captured = self.board.relocate(from, to, kind);
        if let Some(cp) = captured {
            self.captured[cp.color.idx()].push(cp.kind);
        }

        self.halfmove_clock = if moved.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock + 1
        };

        self.castling.touch(from);
        self.castling.touch(to);

        self.en_passant = None;
        if moved.kind == PieceKind::Pawn {
            let (fr, tr) = (rank_of(from), rank_of(to));
            if (tr - fr).abs() == 2 {
                self.en_passant = sq(file_of(from), (fr + tr) / 2);
            }
            if tr == moved.color.promotion_rank() {
                let promo = promotion
                    .filter(|k| k.is_promotion_target())
                    .unwrap_or(PieceKind::Queen);
                self.board.set(to, Some(Piece::new(moved.color, promo)));
            }
        }

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();
        self.ply += 1;

        self.history.push(self.fingerprint());
        self.move_log.push(notation);

        self.classify_termination();

        let check = self.in_check(self.side_to_move);
        self.last_move = Some(LastMove {
            from,
            to,
            captured: captured.is_some(),
            check,
            kind,
        });

        if let Some(entry) = self.move_log.last_mut() {
            if self.status == GameStatus::Checkmate {
                entry.push('#');
            } else if check {
                entry.push('+');
            }
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
