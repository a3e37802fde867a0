//! Position fingerprints for repetition detection.
//!
//! A fingerprint XORs together fixed pseudo-random keys for:
//! - each piece on each square (12 pieces × 64 squares)
//! - black to move
//! - each castling flag that is still set
//! - the en-passant target square, when present
//!
//! Move counters are not part of the key: two positions that differ
//! only in halfmove clock, fullmove number or ply are the same position.

use crate::board::Position;
use crate::types::{Color, Piece};

pub struct FingerprintKeys {
    /// Indexed by [color][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    pub black_to_move: u64,
    /// [wk, wq, bk, bq]
    pub castling: [u64; 4],
    /// One key per en-passant target square.
    pub en_passant: [u64; 64],
}

impl FingerprintKeys {
    /// Keys are derived from a splitmix64 stream with a fixed seed, so
    /// fingerprints are stable across runs and can be persisted in snapshots.
    pub const fn new() -> Self {
        const fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            z ^ (z >> 31)
        }

        let mut state = 0x5EED_C4E5_5F00_D001u64;

        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut kind = 0;
            while kind < 6 {
                let mut sq = 0;
                while sq < 64 {
                    pieces[color][kind][sq] = splitmix64(&mut state);
                    sq += 1;
                }
                kind += 1;
            }
            color += 1;
        }

        let black_to_move = splitmix64(&mut state);

        let mut castling = [0u64; 4];
        let mut i = 0;
        while i < 4 {
            castling[i] = splitmix64(&mut state);
            i += 1;
        }

        let mut en_passant = [0u64; 64];
        let mut i = 0;
        while i < 64 {
            en_passant[i] = splitmix64(&mut state);
            i += 1;
        }

        FingerprintKeys {
            pieces,
            black_to_move,
            castling,
            en_passant,
        }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }
}

impl Default for FingerprintKeys {
    fn default() -> Self {
        Self::new()
    }
}

/// Global keys, computed at compile time.
pub static KEYS: FingerprintKeys = FingerprintKeys::new();

impl Position {
    /// Compact identity of board, side to move, castling rights and en-passant target.
    pub fn fingerprint(&self) -> u64 {
        let mut h = 0u64;
        for (sq, pc) in self.board().occupied() {
            h ^= KEYS.piece_key(pc, sq);
        }
        if self.side_to_move() == Color::Black {
            h ^= KEYS.black_to_move;
        }
        for (i, set) in self.castling().flags().into_iter().enumerate() {
            if set {
                h ^= KEYS.castling[i];
            }
        }
        if let Some(ep) = self.en_passant() {
            h ^= KEYS.en_passant[ep as usize];
        }
        h
    }
}

#[cfg(test)]
#[path = "fingerprint_tests.rs"]
mod fingerprint_tests;
