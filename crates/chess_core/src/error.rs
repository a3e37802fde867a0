//! Error types returned by the rules engine.

use thiserror::Error;

use crate::types::{Color, GameStatus};

/// Why a move (or a terminating call) was refused. A refused call never changes the position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is already over ({0:?})")]
    GameOver(GameStatus),
    #[error("square index out of range")]
    OffBoard,
    #[error("no piece on square {0}")]
    EmptySquare(u8),
    #[error("piece belongs to {piece:?} but {to_move:?} is to move")]
    WrongSide { piece: Color, to_move: Color },
    #[error("illegal move {from} -> {to}")]
    Illegal { from: u8, to: u8 },
    #[error("move {from} -> {to} leaves the king in check")]
    ExposesKing { from: u8, to: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("expected at least 4 space-separated fields, found {0}")]
    MissingFields(usize),
    #[error("expected 8 ranks in board field, found {0}")]
    RankCount(usize),
    #[error("invalid piece character '{0}'")]
    Piece(char),
    #[error("rank {0} does not describe exactly 8 files")]
    RankLength(usize),
    #[error("invalid side to move '{0}'")]
    SideToMove(String),
    #[error("invalid castling character '{0}'")]
    Castling(char),
    #[error("invalid en-passant square '{0}'")]
    EnPassant(String),
    #[error("invalid move counter '{0}'")]
    Counter(String),
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("board must hold 64 cells, found {0}")]
    BoardSize(usize),
    #[error("square index {0} is off the board")]
    Square(u8),
}
