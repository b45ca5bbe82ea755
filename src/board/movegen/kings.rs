use super::super::{Board, CastleSide, Color, Move, MoveKind, PieceKind, Square};

/// Padded offsets of the eight king steps; also the queen's directions.
pub(crate) const KING_OFFSETS: [isize; 8] = [-13, -12, -11, -1, 1, 11, 12, 13];

const KING_HOME_FILE: usize = 4;

/// Files for one castling side: (rook start, king destination, rook destination).
const fn castle_files(side: CastleSide) -> (usize, usize, usize) {
    match side {
        CastleSide::KingSide => (7, 6, 5),
        CastleSide::QueenSide => (0, 2, 3),
    }
}

impl Board {
    /// Castling moves for `color`.
    ///
    /// Offered when the right is held, king and rook stand on their start
    /// squares, the king's and rook's destinations are empty (plus the b-file
    /// square on the queen side), the king is not attacked and the square it
    /// crosses is not attacked. Landing in check is left to the legality
    /// filter.
    pub(super) fn push_castling_moves(&self, color: Color, moves: &mut Vec<Move>) {
        let rank = color.back_rank();
        let from = Square::new_unchecked(rank, KING_HOME_FILE);
        if !self.piece_on(from).is(PieceKind::King, color) {
            return;
        }
        let enemy = color.opponent();
        let mut king_safe: Option<bool> = None;

        for side in CastleSide::BOTH {
            if !self.castling_rights().has(color, side) {
                continue;
            }
            let (rook_file, king_file, rook_dest_file) = castle_files(side);
            let rook_from = Square::new_unchecked(rank, rook_file);
            let to = Square::new_unchecked(rank, king_file);
            let rook_to = Square::new_unchecked(rank, rook_dest_file);

            if !self.piece_on(rook_from).is(PieceKind::Rook, color) {
                continue;
            }
            if !self.piece_on(to).is_empty() || !self.piece_on(rook_to).is_empty() {
                continue;
            }
            if side == CastleSide::QueenSide && !self.piece_on(Square::new_unchecked(rank, 1)).is_empty() {
                continue;
            }
            if self.is_square_attacked(rook_to, enemy) {
                continue;
            }
            if !*king_safe.get_or_insert_with(|| !self.is_square_attacked(from, enemy)) {
                return;
            }

            moves.push(Move::new(MoveKind::Castling {
                from,
                to,
                rook_from,
                rook_to,
            }));
        }
    }
}
