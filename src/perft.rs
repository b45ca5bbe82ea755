//! Perft: count leaf nodes of the legal move tree.

use crate::board::{Board, Color, Move};

impl Board {
    /// Number of legal move sequences of length `depth` starting with `color`.
    #[must_use]
    pub fn perft(&self, color: Color, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves(color);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            let mut child = self.clone();
            if child.make_move(&m).is_ok() {
                nodes += child.perft(color.opponent(), depth - 1);
            }
        }
        nodes
    }

    /// Per-root-move perft counts, for pinpointing move generation bugs.
    #[must_use]
    pub fn perft_divide(&self, color: Color, depth: usize) -> Vec<(Move, u64)> {
        self.legal_moves(color)
            .into_iter()
            .map(|m| {
                let mut child = self.clone();
                let nodes = match child.make_move(&m) {
                    Ok(()) => child.perft(color.opponent(), depth.saturating_sub(1)),
                    Err(_) => 0,
                };
                (m, nodes)
            })
            .collect()
    }
}
