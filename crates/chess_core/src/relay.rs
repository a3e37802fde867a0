//! Move packets relayed between two engine instances.
//!
//! Each packet carries the `ply` the sender reached after playing it. A receiver
//! whose own `ply` is already at or past that value has seen the move and drops
//! the packet.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Position;
use crate::error::MoveError;
use crate::types::PieceKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayedMove {
    pub from: u8,
    pub to: u8,
    pub promotion: Option<PieceKind>,
    pub ply: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayOutcome {
    Applied,
    /// Duplicate or out-of-date packet; the position was left untouched.
    Stale,
}

impl RelayedMove {
    /// Packet for the move just played on `pos`, tagged with the resulting ply.
    pub fn from_last_move(pos: &Position, promotion: Option<PieceKind>) -> Option<Self> {
        pos.last_move().map(|lm| RelayedMove {
            from: lm.from,
            to: lm.to,
            promotion,
            ply: pos.ply(),
        })
    }
}

impl Position {
    pub fn apply_relayed(&mut self, packet: &RelayedMove) -> Result<RelayOutcome, MoveError> {
        if packet.ply <= self.ply {
            debug!(packet_ply = packet.ply, ply = self.ply, "ignoring stale relayed move");
            return Ok(RelayOutcome::Stale);
        }
        self.apply(packet.from, packet.to, packet.promotion)?;
        Ok(RelayOutcome::Applied)
    }
}

#[cfg(test)]
#[path = "relay_tests.rs"]
mod relay_tests;
