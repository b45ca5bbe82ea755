//! Move generation on the padded board.
//!
//! Every piece moves by adding a fixed offset to its padded index. The
//! two-cell border of [`Piece::INVALID`] stops both steppers and sliders
//! (including knight jumps) without any coordinate checks.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Move, Piece, PieceKind, Square};

pub(crate) use kings::KING_OFFSETS;
pub(crate) use knights::KNIGHT_OFFSETS;
pub(crate) use pawns::pawn_captures;
pub(crate) use sliders::{DIAGONAL_OFFSETS, ORTHOGONAL_OFFSETS};

/// Padded index reached from `idx` by `offset`.
///
/// Sources are always on the playing area, so the largest offset (a knight
/// jump of 25) stays inside the 144-cell array.
#[inline]
pub(crate) fn step(idx: usize, offset: isize) -> usize {
    idx.wrapping_add_signed(offset)
}

impl Board {
    /// All moves for `color` that obey piece movement, ignoring whether the
    /// mover's king is left capturable.
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        for (kind, from) in self.material(color).iter() {
            self.push_piece_moves(from, kind, color, &mut moves);
        }
        self.push_castling_moves(color, &mut moves);
        moves
    }

    /// Legal moves for `color`.
    ///
    /// A pseudo-legal move is kept when, on a scratch copy with the move
    /// applied, the opponent cannot capture the mover's king.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.pseudo_legal_moves(color)
            .into_iter()
            .filter(|m| self.is_legal(m, color))
            .collect()
    }

    /// Legal moves of the piece on `from`. Empty if it holds no piece of
    /// `color`.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square, color: Color) -> Vec<Move> {
        let piece = self.piece_on(from);
        let Some(kind) = piece.kind().filter(|_| piece.is_color(color)) else {
            return Vec::new();
        };
        let mut moves = Vec::new();
        self.push_piece_moves(from, kind, color, &mut moves);
        if kind == PieceKind::King {
            self.push_castling_moves(color, &mut moves);
        }
        moves.retain(|m| self.is_legal(m, color));
        moves
    }

    /// Returns true if `color` has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pseudo_legal_moves(color)
            .iter()
            .any(|m| self.is_legal(m, color))
    }

    pub(crate) fn is_legal(&self, m: &Move, color: Color) -> bool {
        let mut scratch = self.clone();
        scratch.make_move(m).is_ok() && !scratch.can_capture_king(color.opponent())
    }

    fn push_piece_moves(&self, from: Square, kind: PieceKind, color: Color, moves: &mut Vec<Move>) {
        match kind {
            PieceKind::Pawn => self.push_pawn_moves(from, color, moves),
            PieceKind::Knight => self.push_step_moves(from, color, &KNIGHT_OFFSETS, moves),
            PieceKind::King => self.push_step_moves(from, color, &KING_OFFSETS, moves),
            PieceKind::Bishop => self.push_slide_moves(from, color, &DIAGONAL_OFFSETS, moves),
            PieceKind::Rook => self.push_slide_moves(from, color, &ORTHOGONAL_OFFSETS, moves),
            PieceKind::Queen => {
                self.push_slide_moves(from, color, &DIAGONAL_OFFSETS, moves);
                self.push_slide_moves(from, color, &ORTHOGONAL_OFFSETS, moves);
            }
        }
    }

    /// True if `piece` may be landed on by `color`: empty or an enemy piece.
    #[inline]
    fn is_open_to(piece: Piece, color: Color) -> bool {
        piece.is_empty() || piece.is_color(color.opponent())
    }
}
