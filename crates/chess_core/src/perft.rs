use crate::board::Position;

/// Pure perft node count.
/// Counts all legal move sequences from the current position down to `depth`.
///
/// Game-ending rules (repetition, fifty moves, material) are ignored so the
/// counts stay comparable with published tables; only running out of legal
/// moves stops a line. A promotion counts once, not once per target piece,
/// since move generation leaves the promotion choice to the caller.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(pos: &Position, depth: u8, layers: &mut [Vec<crate::types::Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 0;
        };

        pos.legal_moves_into(pos.side_to_move(), buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let Some(kind) = pos
                .piece_at(mv.from)
                .and_then(|pc| pos.move_kind(pc, mv.from, mv.to))
            else {
                continue;
            };
            let mut child = pos.clone();
            child.commit(mv.from, mv.to, kind, mv.promo);
            nodes += inner(&child, depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, depth, &mut layers[..])
}
