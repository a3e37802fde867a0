//! Plays the engine against itself and prints the game.
//!
//! Usage:
//!   cargo run --example self_play -p minimax_engine -- [config.toml]
//!
//! Set `RUST_LOG=minimax_engine=debug,chess_core=debug` to trace search and
//! game-state events.

use std::env;
use std::error::Error;

use chess_core::{Engine, Position, Winner};
use minimax_engine::{EngineConfig, MinimaxEngine};
use tracing_subscriber::EnvFilter;

const MAX_PLIES: u32 = 200;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match env::args().nth(1) {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let mut engine = MinimaxEngine::from_config(&config)?;
    engine.new_game();

    println!("{} at depth {}", engine.name(), engine.depth());

    let mut pos = Position::startpos();
    while !pos.is_game_over() && pos.ply() < MAX_PLIES {
        let result = engine.choose(&pos);
        let Some(mv) = result.best_move else { break };
        pos.apply_move(mv)?;

        if let Some(san) = pos.move_log().last() {
            println!("{:>4}. {:<8} score {:>7} nodes {}", pos.ply(), san, result.score, result.nodes);
        }
    }

    println!();
    println!("Final position: {}", pos.to_fen());
    match pos.winner() {
        Some(Winner::Draw(reason)) => println!("Draw ({reason:?})"),
        Some(winner) => println!("{:?} wins by {:?}", winner, pos.status()),
        None => println!("Stopped after {} plies", pos.ply()),
    }
    Ok(())
}
