//! Per-color material index: piece kind to the squares holding it.

use super::{PieceKind, Square, SquareSet};

/// Squares occupied by one color, grouped by piece kind.
///
/// Maintained by the board on every square write; never rebuilt by
/// scanning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaterialIndex {
    squares: [SquareSet; 6],
}

impl MaterialIndex {
    /// Squares holding pieces of `kind`
    #[inline]
    #[must_use]
    pub fn squares(&self, kind: PieceKind) -> SquareSet {
        self.squares[kind.index()]
    }

    /// Number of pieces of `kind`
    #[inline]
    #[must_use]
    pub fn count(&self, kind: PieceKind) -> usize {
        self.squares[kind.index()].len()
    }

    /// All (kind, square) pairs in kind order, pawns first
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, Square)> + '_ {
        PieceKind::ALL
            .into_iter()
            .flat_map(move |kind| self.squares(kind).iter().map(move |sq| (kind, sq)))
    }

    /// Total number of pieces, king included
    #[must_use]
    pub fn total(&self) -> usize {
        self.squares.iter().map(|set| set.len()).sum()
    }

    #[inline]
    pub(crate) fn add(&mut self, kind: PieceKind, sq: Square) {
        self.squares[kind.index()].insert(sq);
    }

    #[inline]
    pub(crate) fn remove(&mut self, kind: PieceKind, sq: Square) {
        self.squares[kind.index()].remove(sq);
    }
}
