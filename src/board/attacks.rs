//! Attack detection and material sufficiency.

use super::movegen::{
    pawn_captures, step, DIAGONAL_OFFSETS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL_OFFSETS,
};
use super::{Board, Color, PieceKind, Square};

impl Board {
    /// Returns true if any piece of color `by` attacks `sq`.
    ///
    /// Looks outward from the target square instead of generating the
    /// attacker's moves, so pawn diagonals count even onto empty squares and
    /// castling is never consulted.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.is_attacked_at(sq.padded(), by)
    }

    pub(crate) fn is_attacked_at(&self, idx: usize, by: Color) -> bool {
        // a pawn of `by` attacks us from where our own pawn would capture to
        for offset in pawn_captures(by.opponent()) {
            if self.get(step(idx, offset)).is(PieceKind::Pawn, by) {
                return true;
            }
        }
        if KNIGHT_OFFSETS
            .iter()
            .any(|&o| self.get(step(idx, o)).is(PieceKind::Knight, by))
        {
            return true;
        }
        if KING_OFFSETS
            .iter()
            .any(|&o| self.get(step(idx, o)).is(PieceKind::King, by))
        {
            return true;
        }
        self.slider_hits(idx, by, &DIAGONAL_OFFSETS, PieceKind::Bishop)
            || self.slider_hits(idx, by, &ORTHOGONAL_OFFSETS, PieceKind::Rook)
    }

    /// First piece along each ray is a `by` queen or `by` `kind`.
    fn slider_hits(&self, idx: usize, by: Color, directions: &[isize], kind: PieceKind) -> bool {
        directions.iter().any(|&dir| {
            let mut cur = step(idx, dir);
            loop {
                let piece = self.get(cur);
                if !piece.is_empty() {
                    return piece.is(kind, by) || piece.is(PieceKind::Queen, by);
                }
                cur = step(cur, dir);
            }
        })
    }

    /// Returns true if `attacker` could take the opposing king right now.
    #[must_use]
    pub fn can_capture_king(&self, attacker: Color) -> bool {
        self.king_square(attacker.opponent())
            .is_some_and(|king| self.is_square_attacked(king, attacker))
    }

    /// Returns true if `color` is in check.
    #[inline]
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.can_capture_king(color.opponent())
    }

    /// `color` cannot force mate on its own: no pawn, rook or queen, and at
    /// most one minor piece.
    ///
    /// Two same-colored bishops still count as sufficient.
    #[must_use]
    pub fn has_insufficient_material(&self, color: Color) -> bool {
        let material = self.material(color);
        let heavy = [PieceKind::Pawn, PieceKind::Rook, PieceKind::Queen]
            .into_iter()
            .any(|kind| material.count(kind) > 0);
        let minors = material.count(PieceKind::Bishop) + material.count(PieceKind::Knight);
        !heavy && minors <= 1
    }
}
