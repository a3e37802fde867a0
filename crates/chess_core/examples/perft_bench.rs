//! Perft timing and per-move breakdown ("divide").
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_core -- [depth] [fen]
//!
//! Without a FEN, times every position in the suite. With a FEN, prints the
//! node count below each root move first, which is the quickest way to find
//! which branch disagrees with a reference count.
//!
//!   cargo run --release --example perft_bench -p chess_core -- 3 "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"

use std::env;
use std::error::Error;
use std::time::{Duration, Instant};

use chess_core::{Position, move_to_uci, perft};

const SUITE: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    (
        "Italian middlegame",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - -",
    ),
];

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let depth: u8 = args.next().and_then(|s| s.parse().ok()).unwrap_or(4);

    match args.next() {
        Some(fen) => divide(&Position::from_fen(&fen)?, depth)?,
        None => run_suite(depth)?,
    }
    Ok(())
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn divide(pos: &Position, depth: u8) -> Result<(), Box<dyn Error>> {
    println!("{}", pos.to_fen());
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let mut total = 0u64;
    for mv in pos.legal_moves(pos.side_to_move()) {
        let mut child = pos.clone();
        child.apply_move(mv)?;
        let nodes = perft(&child, depth.saturating_sub(1));
        println!("{:<6} {nodes}", move_to_uci(mv));
        total += nodes;
    }
    let elapsed = start.elapsed();

    println!();
    println!("Nodes: {total}");
    println!("Time: {elapsed:.3?} ({:.0} nps)", nps(total, elapsed));
    Ok(())
}

fn run_suite(depth: u8) -> Result<(), Box<dyn Error>> {
    println!("Perft suite, depth {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, fen) in SUITE {
        let pos = Position::from_fen(fen)?;

        let start = Instant::now();
        let nodes = perft(&pos, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;
        println!(
            "{name:.<30} {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!(
        "Total: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
    Ok(())
}
