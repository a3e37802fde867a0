pub mod attacks;
pub mod board;
pub mod error;
pub mod fingerprint;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod relay;
pub mod snapshot;
pub mod termination;
pub mod types;
pub mod uci;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::*;
pub use notation::move_notation;
pub use perft::perft;
pub use relay::*;
pub use snapshot::*;
pub use types::*;
pub use uci::*;

// =============================================================================
// Engine trait, implemented by every move-selecting opponent
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns, from White's point of view
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of positions visited
    pub nodes: u64,
}

/// Trait that all opponents implement.
///
/// The scripted minimax opponent implements it directly; a text-driven
/// opponent can wrap its reply parsing (see [`extract_uci_move`]) behind it.
pub trait Engine: Send {
    /// Picks a move for the side to move in `pos`, looking `depth` plies ahead.
    ///
    /// Callers must not invoke this on a finished game.
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
