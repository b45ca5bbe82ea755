//! Zobrist hashing for chess positions.
//!
//! Each position feature (a piece on a square, white to move, a castling
//! right, an en-passant file) owns a random 64-bit key; a position's hash is
//! the XOR of the keys of its active features. Distinct positions may
//! collide; callers treat equal hashes as equal positions.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, CastlingRights, Color};
use crate::game::Game;

/// Seed of the process-wide key set.
const DEFAULT_SEED: u64 = 1_234_567_890;

static DEFAULT_HASHER: Lazy<PositionHasher> = Lazy::new(|| PositionHasher::with_seed(DEFAULT_SEED));

/// The shared, deterministically seeded hasher used by [`Game`] and the search.
#[inline]
#[must_use]
pub fn default_hasher() -> &'static PositionHasher {
    &DEFAULT_HASHER
}

/// A full set of Zobrist keys.
#[derive(Clone, Debug)]
pub struct PositionHasher {
    // piece_keys[color][kind][square]
    piece_keys: [[[u64; 64]; 6]; 2],
    white_to_move: u64,
    // KQkq order
    castling_keys: [u64; 4],
    // only the file of the en-passant target matters
    en_passant_keys: [u64; 8],
}

impl PositionHasher {
    /// Keys drawn from OS entropy; hashes differ between processes.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(&mut StdRng::from_entropy())
    }

    /// Deterministic keys for a given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: &mut StdRng) -> Self {
        let mut piece_keys = [[[0; 64]; 6]; 2];
        for color in &mut piece_keys {
            for kind in color.iter_mut() {
                for key in kind.iter_mut() {
                    *key = rng.gen();
                }
            }
        }
        let white_to_move = rng.gen();
        let mut castling_keys = [0; 4];
        for key in &mut castling_keys {
            *key = rng.gen();
        }
        let mut en_passant_keys = [0; 8];
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        PositionHasher {
            piece_keys,
            white_to_move,
            castling_keys,
            en_passant_keys,
        }
    }

    /// Hash of a game's current position and side to move.
    #[must_use]
    pub fn hash(&self, game: &Game) -> u64 {
        self.hash_position(game.board(), game.side_to_move())
    }

    /// Hash of a board with `side_to_move` to play.
    #[must_use]
    pub fn hash_position(&self, board: &Board, side_to_move: Color) -> u64 {
        let mut hash = 0;

        for color in Color::BOTH {
            for (kind, sq) in board.material(color).iter() {
                hash ^= self.piece_keys[color.index()][kind.index()][sq.index()];
            }
        }

        if side_to_move == Color::White {
            hash ^= self.white_to_move;
        }

        for (color, side, granted) in board.castling_rights().iter() {
            if granted {
                hash ^= self.castling_keys[CastlingRights::slot(color, side)];
            }
        }

        if let Some(ep) = board.en_passant_target() {
            hash ^= self.en_passant_keys[ep.file()];
        }

        hash
    }
}

impl Default for PositionHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind, Square};

    #[test]
    fn test_seeded_hashers_agree() {
        let board = Board::starting_position();
        let a = PositionHasher::with_seed(7);
        let b = PositionHasher::with_seed(7);
        assert_eq!(
            a.hash_position(&board, Color::White),
            b.hash_position(&board, Color::White)
        );
    }

    #[test]
    fn test_side_to_move_changes_hash() {
        let board = Board::starting_position();
        let hasher = default_hasher();
        assert_ne!(
            hasher.hash_position(&board, Color::White),
            hasher.hash_position(&board, Color::Black)
        );
    }

    #[test]
    fn test_every_feature_contributes() {
        let hasher = default_hasher();
        let base = Board::from_fen_parts("r3k2r/8/8/8/8/8/8/R3K2R", "KQkq", "-").unwrap();
        let base_hash = hasher.hash_position(&base, Color::White);

        let no_castle = Board::from_fen_parts("r3k2r/8/8/8/8/8/8/R3K2R", "Qkq", "-").unwrap();
        assert_ne!(hasher.hash_position(&no_castle, Color::White), base_hash);

        let with_ep = Board::from_fen_parts("r3k2r/8/8/8/8/8/8/R3K2R", "KQkq", "e3").unwrap();
        assert_ne!(hasher.hash_position(&with_ep, Color::White), base_hash);

        let mut moved = base.clone();
        let a1: Square = "a1".parse().unwrap();
        let a2: Square = "a2".parse().unwrap();
        moved.put(a1, Piece::EMPTY);
        moved.put(a2, Piece::new(PieceKind::Rook, Color::White));
        assert_ne!(hasher.hash_position(&moved, Color::White), base_hash);
    }

    #[test]
    fn test_transposition_hashes_equal() {
        let hasher = default_hasher();
        let mut one = Board::starting_position();
        let mut two = Board::starting_position();
        for (board, order) in [(&mut one, ["g1f3", "b1c3"]), (&mut two, ["b1c3", "g1f3"])] {
            for uci in order {
                let mv = board
                    .legal_moves(Color::White)
                    .into_iter()
                    .find(|m| m.to_string() == uci)
                    .unwrap();
                board.make_move(&mv).unwrap();
            }
        }
        assert_eq!(
            hasher.hash_position(&one, Color::Black),
            hasher.hash_position(&two, Color::Black)
        );
    }
}
