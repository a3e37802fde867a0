//! Coordinate move text ("e2e4", "e7e8q"), as exchanged with remote peers and
//! text-producing opponents.

use crate::{board::Position, types::*};

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::with_capacity(5);
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(p.letter().to_ascii_lowercase());
    }
    s
}

/// Parses `txt` and matches it against the legal moves of the side to move.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Option<Move> {
    let txt = txt.trim();
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return None;
    }
    let from = coord_to_sq(&txt[0..2])?;
    let to = coord_to_sq(&txt[2..4])?;
    let promo = match txt[4..].chars().next() {
        Some(c) => Some(PieceKind::from_letter(c).filter(|k| k.is_promotion_target())?),
        None => None,
    };

    pos.legal_moves(pos.side_to_move())
        .into_iter()
        .find(|m| m.from == from && m.to == to)
        .map(|m| Move { promo, ..m })
}

/// Finds the first coordinate move in free-form text that is legal for the
/// side to move. Matching is case-insensitive; tokens that are well formed but
/// illegal are skipped.
pub fn extract_uci_move(pos: &Position, text: &str) -> Option<Move> {
    let lower = text.to_ascii_lowercase();
    let b = lower.as_bytes();
    let is_file = |c: u8| (b'a'..=b'h').contains(&c);
    let is_rank = |c: u8| (b'1'..=b'8').contains(&c);

    let mut i = 0;
    while i + 4 <= b.len() {
        if is_file(b[i]) && is_rank(b[i + 1]) && is_file(b[i + 2]) && is_rank(b[i + 3]) {
            let promo = b.get(i + 4).filter(|c| b"qrbn".contains(*c));
            let len = if promo.is_some() { 5 } else { 4 };
            // Every byte in the window is ASCII, so slicing is on char boundaries.
            if let Some(mv) = parse_uci_move(pos, &lower[i..i + len]) {
                return Some(mv);
            }
            i += len;
        } else {
            i += 1;
        }
    }
    None
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
