//! Lossless export/import of a [`Position`] for session persistence and peer sync.

use serde::{Deserialize, Serialize};

use crate::board::{Board, CastlingRights, Position};
use crate::error::SnapshotError;
use crate::types::*;

/// Plain-data mirror of every `Position` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// 64 cells, a1 first.
    pub board: Vec<Option<Piece>>,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub ply: u32,
    pub status: GameStatus,
    pub winner: Option<Winner>,
    pub history: Vec<u64>,
    pub move_log: Vec<String>,
    pub captured_white: Vec<PieceKind>,
    pub captured_black: Vec<PieceKind>,
    pub last_move: Option<LastMove>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Position {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.0.to_vec(),
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            ply: self.ply,
            status: self.status,
            winner: self.winner,
            history: self.history.clone(),
            move_log: self.move_log.clone(),
            captured_white: self.captured[Color::White.idx()].clone(),
            captured_black: self.captured[Color::Black.idx()].clone(),
            last_move: self.last_move,
        }
    }

    /// Rebuilds a position from a snapshot. Only the shape is checked (board
    /// size and square ranges); the contents are trusted as given.
    pub fn restore(snapshot: Snapshot) -> Result<Self, SnapshotError> {
        let cells: [Option<Piece>; 64] = snapshot
            .board
            .try_into()
            .map_err(|b: Vec<Option<Piece>>| SnapshotError::BoardSize(b.len()))?;

        let squares = snapshot
            .en_passant
            .into_iter()
            .chain(snapshot.last_move.iter().flat_map(|m| [m.from, m.to]));
        for s in squares {
            if s >= 64 {
                return Err(SnapshotError::Square(s));
            }
        }

        Ok(Position {
            board: Board(cells),
            side_to_move: snapshot.side_to_move,
            castling: snapshot.castling,
            en_passant: snapshot.en_passant,
            halfmove_clock: snapshot.halfmove_clock,
            fullmove_number: snapshot.fullmove_number,
            ply: snapshot.ply,
            status: snapshot.status,
            winner: snapshot.winner,
            history: snapshot.history,
            move_log: snapshot.move_log,
            captured: [snapshot.captured_white, snapshot.captured_black],
            last_move: snapshot.last_move,
        })
    }
}

impl TryFrom<Snapshot> for Position {
    type Error = SnapshotError;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        Position::restore(snapshot)
    }
}

impl From<&Position> for Snapshot {
    fn from(pos: &Position) -> Self {
        pos.snapshot()
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
