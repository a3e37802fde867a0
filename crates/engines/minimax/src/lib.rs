//! Minimax Chess Engine
//!
//! Plain minimax with alpha-beta pruning, material plus piece-square
//! evaluation, and a random tie-break among equally scored root moves.
//! Strength is set by search depth, usually picked through [`Difficulty`].

mod config;
mod eval;
mod search;

use chess_core::{Engine, Position, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use config::{ConfigError, Difficulty, EngineConfig};
pub use eval::{evaluate, MATE_SCORE};
pub use search::{search, select_move};

/// Scripted opponent searching a fixed number of plies.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    depth: u8,
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    /// Engine searching `depth` plies, with the tie-break seeded from OS entropy.
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
            rng: StdRng::from_entropy(),
            nodes: 0,
        }
    }

    pub fn with_seed(depth: u8, seed: u64) -> Self {
        Self {
            depth: depth.max(1),
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let depth = config.search_depth();
        Ok(match config.seed {
            Some(seed) => Self::with_seed(depth, seed),
            None => Self::new(depth),
        })
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Searches at the engine's configured depth.
    pub fn choose(&mut self, pos: &Position) -> SearchResult {
        self.search(pos, self.depth)
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(Difficulty::default().depth())
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        self.nodes = 0;
        let outcome = select_move(pos, depth, &mut self.rng, &mut self.nodes);

        SearchResult {
            best_move: outcome.map(|(mv, _)| mv),
            score: outcome.map(|(_, s)| s).unwrap_or_else(|| evaluate(pos)),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
