//! End-of-game detection and the externally triggered terminations.

use tracing::debug;

use crate::board::Position;
use crate::error::MoveError;
use crate::types::*;

impl Position {
    /// Re-evaluates the game state after a move. First match wins:
    /// no legal moves (mate or stalemate), fifty-move rule, insufficient
    /// material, threefold repetition.
    pub(crate) fn classify_termination(&mut self) {
        let mover = self.side_to_move;
        if !self.has_legal_moves(mover) {
            if self.in_check(mover) {
                self.finish(GameStatus::Checkmate, mover.other().into());
            } else {
                self.finish(GameStatus::Stalemate, Winner::Draw(DrawReason::Stalemate));
            }
            return;
        }
        if self.is_fifty_move_draw() {
            self.finish(GameStatus::Draw, Winner::Draw(DrawReason::FiftyMove));
        } else if self.is_insufficient_material() {
            self.finish(
                GameStatus::Draw,
                Winner::Draw(DrawReason::InsufficientMaterial),
            );
        } else if self.is_threefold_repetition() {
            self.finish(GameStatus::Draw, Winner::Draw(DrawReason::Repetition));
        }
    }

    fn finish(&mut self, status: GameStatus, winner: Winner) {
        debug!(?status, ?winner, ply = self.ply, "game over");
        self.status = status;
        self.winner = Some(winner);
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Bare kings, or bare kings plus one knight or bishop.
    pub fn is_insufficient_material(&self) -> bool {
        match self.board.piece_count() {
            2 => true,
            3 => self.board.occupied().any(|(_, pc)| pc.kind.is_minor()),
            _ => false,
        }
    }

    /// How often the current fingerprint appears in the history.
    pub fn repetition_count(&self) -> usize {
        match self.history.last() {
            Some(current) => self.history.iter().filter(|&h| h == current).count(),
            None => 0,
        }
    }

    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    /// `color` gives up; the opponent wins.
    pub fn resign(&mut self, color: Color) -> Result<(), MoveError> {
        self.end_externally(GameStatus::Resigned, color)
    }

    /// `color` ran out of time; the opponent wins.
    pub fn timeout_loss(&mut self, color: Color) -> Result<(), MoveError> {
        self.end_externally(GameStatus::Timeout, color)
    }

    fn end_externally(&mut self, status: GameStatus, loser: Color) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver(self.status));
        }
        self.finish(status, loser.other().into());
        Ok(())
    }
}

#[cfg(test)]
#[path = "termination_tests.rs"]
mod termination_tests;
