//! Minimax search with alpha-beta pruning over cloned positions.

use chess_core::{Color, Move, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::eval::evaluate;

/// Searches the position and returns the best move with its score.
///
/// Root moves are shuffled first so equal-scoring moves are picked at random;
/// after that a move only replaces the current best on a strictly better
/// score. White keeps the maximum, Black the minimum.
///
/// Returns `None` when the game is over or the side to move has no moves.
pub fn select_move<R: Rng + ?Sized>(
    pos: &Position,
    depth: u8,
    rng: &mut R,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    if pos.is_game_over() {
        return None;
    }

    let mut moves = pos.legal_moves(pos.side_to_move());
    moves.shuffle(rng);

    let maximizing = pos.side_to_move() == Color::White;
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        let mut child = pos.clone();
        if child.apply_move(mv).is_err() {
            continue;
        }
        *nodes += 1;

        let score = search(
            &child,
            depth.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            !maximizing,
            nodes,
        );

        let improves = match best {
            None => true,
            Some((_, b)) if maximizing => score > b,
            Some((_, b)) => score < b,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    if let Some((mv, score)) = best {
        debug!(
            depth,
            nodes = *nodes,
            score,
            best = %chess_core::move_to_uci(mv),
            "root search finished"
        );
    }
    best
}

/// Recursive minimax with alpha-beta pruning. Scores are from White's side.
pub fn search(
    pos: &Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 || pos.is_game_over() {
        return evaluate(pos);
    }

    let moves = pos.legal_moves(pos.side_to_move());
    if moves.is_empty() {
        return evaluate(pos);
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let mut child = pos.clone();
        if child.apply_move(mv).is_err() {
            continue;
        }
        *nodes += 1;

        let score = search(&child, depth - 1, alpha, beta, !maximizing, nodes);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
