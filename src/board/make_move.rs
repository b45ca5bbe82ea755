use super::error::MoveError;
use super::{Board, CastleSide, Color, Move, MoveKind, Piece, Square};

/// King and rook start squares, paired with the right they guard.
const CASTLING_HOMES: [(Color, CastleSide, [Square; 2]); 4] = [
    (
        Color::White,
        CastleSide::KingSide,
        [Square::new_unchecked(0, 4), Square::new_unchecked(0, 7)],
    ),
    (
        Color::White,
        CastleSide::QueenSide,
        [Square::new_unchecked(0, 4), Square::new_unchecked(0, 0)],
    ),
    (
        Color::Black,
        CastleSide::KingSide,
        [Square::new_unchecked(7, 4), Square::new_unchecked(7, 7)],
    ),
    (
        Color::Black,
        CastleSide::QueenSide,
        [Square::new_unchecked(7, 4), Square::new_unchecked(7, 0)],
    ),
];

impl Board {
    /// Apply a move produced by move generation.
    ///
    /// The piece on the source square moves to the destination, the
    /// en-passant target is cleared, then the move's own side effect runs.
    /// Finally every castling right whose king or rook home is the source or
    /// destination is revoked, which covers king moves, rook moves and rook
    /// captures alike.
    pub fn make_move(&mut self, m: &Move) -> Result<(), MoveError> {
        let from = m.from();
        let to = m.to();
        let moving = self.piece_on(from);
        if !moving.is_piece() {
            return Err(MoveError::EmptySource { square: from });
        }

        self.put(to, moving);
        self.put(from, Piece::EMPTY);
        self.set_en_passant_target(None);

        match *m.kind() {
            MoveKind::Standard { .. } => {}
            MoveKind::Castling {
                rook_from, rook_to, ..
            } => {
                let rook = self.piece_on(rook_from);
                self.put(rook_to, rook);
                self.put(rook_from, Piece::EMPTY);
            }
            MoveKind::PawnDouble { en_passant, .. } => {
                self.set_en_passant_target(Some(en_passant));
            }
            MoveKind::EnPassant { captured, .. } => {
                self.put(captured, Piece::EMPTY);
            }
            MoveKind::Promotion { piece, .. } => {
                if let Some(color) = moving.color() {
                    self.put(to, Piece::new(piece, color));
                }
            }
        }

        self.revoke_castling(from, to);
        Ok(())
    }

    fn revoke_castling(&mut self, from: Square, to: Square) {
        let rights = self.castling_rights_mut();
        for (color, side, homes) in CASTLING_HOMES {
            if homes.contains(&from) || homes.contains(&to) {
                rights.remove(color, side);
            }
        }
    }
}
