//! Move types.

use std::fmt;

use super::piece::PieceKind;
use super::square::Square;

/// The shape of a move. Each variant carries only what it needs to be
/// applied to a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A plain step, slide or capture.
    Standard { from: Square, to: Square },
    /// King move of two files; the rook jumps from `rook_from` to `rook_to`.
    Castling {
        from: Square,
        to: Square,
        rook_from: Square,
        rook_to: Square,
    },
    /// Two-square pawn push; `en_passant` is the square it skipped.
    PawnDouble {
        from: Square,
        to: Square,
        en_passant: Square,
    },
    /// En passant capture; the captured pawn stands on `captured`, not `to`.
    EnPassant {
        from: Square,
        to: Square,
        captured: Square,
    },
    /// Pawn reaching the last rank, replaced by `piece`.
    Promotion {
        from: Square,
        to: Square,
        piece: PieceKind,
    },
}

/// A move produced by the rules engine.
///
/// Moves cannot be built from arbitrary coordinates outside this crate;
/// every value in circulation came out of move generation for a real piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(MoveKind);

impl Move {
    #[inline]
    pub(crate) const fn new(kind: MoveKind) -> Self {
        Move(kind)
    }

    #[inline]
    pub(crate) const fn standard(from: Square, to: Square) -> Self {
        Move(MoveKind::Standard { from, to })
    }

    /// The tagged variant, for exhaustive matching.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> &MoveKind {
        &self.0
    }

    /// Source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        match self.0 {
            MoveKind::Standard { from, .. }
            | MoveKind::Castling { from, .. }
            | MoveKind::PawnDouble { from, .. }
            | MoveKind::EnPassant { from, .. }
            | MoveKind::Promotion { from, .. } => from,
        }
    }

    /// Destination square of the moving piece
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        match self.0 {
            MoveKind::Standard { to, .. }
            | MoveKind::Castling { to, .. }
            | MoveKind::PawnDouble { to, .. }
            | MoveKind::EnPassant { to, .. }
            | MoveKind::Promotion { to, .. } => to,
        }
    }

    /// Promotion piece, if this is a promotion
    #[inline]
    #[must_use]
    pub const fn promotion(&self) -> Option<PieceKind> {
        match self.0 {
            MoveKind::Promotion { piece, .. } => Some(piece),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        matches!(self.0, MoveKind::Castling { .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.0, MoveKind::EnPassant { .. })
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self}")?;
        match self.0 {
            MoveKind::Castling { .. } => write!(f, " castle")?,
            MoveKind::PawnDouble { en_passant, .. } => write!(f, " ep={en_passant}")?,
            MoveKind::EnPassant { captured, .. } => write!(f, " ep x{captured}")?,
            MoveKind::Standard { .. } | MoveKind::Promotion { .. } => {}
        }
        write!(f, ")")
    }
}

/// Long algebraic notation, e.g. `e2e4`, `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}
