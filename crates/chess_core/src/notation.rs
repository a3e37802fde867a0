//! FEN import/export and move-log notation.

use crate::board::{Board, CastlingRights, Position};
use crate::error::FenError;
use crate::types::*;

/// Short algebraic notation for the move log, without check or mate suffixes.
///
/// Castles are `O-O` / `O-O-O`. Other moves are the piece letter (none for
/// pawns), then `x` on captures (prefixed by the source file for pawns), then
/// the destination square.
pub fn move_notation(piece: Piece, from: u8, to: u8, is_capture: bool, kind: MoveKind) -> String {
    match kind {
        MoveKind::CastleKingside => return "O-O".to_string(),
        MoveKind::CastleQueenside => return "O-O-O".to_string(),
        MoveKind::Normal | MoveKind::EnPassant => {}
    }

    let mut s = String::with_capacity(6);
    if piece.kind != PieceKind::Pawn {
        s.push(piece.kind.letter());
    }
    if is_capture {
        if piece.kind == PieceKind::Pawn {
            s.push((b'a' + file_of(from) as u8) as char);
        }
        s.push('x');
    }
    s.push_str(&sq_to_coord(to));
    s
}

impl Position {
    /// Six-field Forsyth-Edwards Notation of the current position.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);
        for rank in (0..8i8).rev() {
            let mut empty = 0;
            for file in 0..8i8 {
                let s = (rank * 8 + file) as u8;
                match self.board.piece_at(s) {
                    Some(pc) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(pc.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let before = fen.len();
        for (set, ch) in self.castling.flags().into_iter().zip(['K', 'Q', 'k', 'q']) {
            if set {
                fen.push(ch);
            }
        }
        if fen.len() == before {
            fen.push('-');
        }

        fen.push(' ');
        match self.en_passant {
            Some(ep) => fen.push_str(&sq_to_coord(ep)),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }

    /// Parses a FEN string. The halfmove and fullmove fields are optional.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::MissingFields(parts.len()));
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }

        let mut board = Board::EMPTY;
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            let mut file: i8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let pc = Piece::from_fen_char(ch).ok_or(FenError::Piece(ch))?;
                    let s = sq(file, rank).ok_or(FenError::RankLength(8 - rank_idx))?;
                    board.set(s, Some(pc));
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::RankLength(8 - rank_idx));
                }
            }
            if file != 8 {
                return Err(FenError::RankLength(8 - rank_idx));
            }
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::NONE;
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(FenError::Castling(c)),
                }
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            s => Some(coord_to_sq(s).ok_or_else(|| FenError::EnPassant(s.to_string()))?),
        };

        let counter = |field: Option<&&str>, default: u32| -> Result<u32, FenError> {
            match field {
                Some(s) => s.parse().map_err(|_| FenError::Counter(s.to_string())),
                None => Ok(default),
            }
        };
        let halfmove_clock = counter(parts.get(4), 0)?;
        let fullmove_number = counter(parts.get(5), 1)?.max(1);

        Ok(Position::from_parts(
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        ))
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
