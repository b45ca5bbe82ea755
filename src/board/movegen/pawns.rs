use super::super::{Board, Color, Move, MoveKind, PieceKind, Square};
use super::step;

/// Padded offset of a single pawn push for `color`.
#[inline]
pub(crate) const fn pawn_push(color: Color) -> isize {
    match color {
        Color::White => 12,
        Color::Black => -12,
    }
}

/// Padded offsets of the two diagonal pawn captures for `color`.
#[inline]
pub(crate) const fn pawn_captures(color: Color) -> [isize; 2] {
    let push = pawn_push(color);
    [push - 1, push + 1]
}

impl Board {
    pub(super) fn push_pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let origin = from.padded();
        let push = pawn_push(color);

        let single = step(origin, push);
        if self.get(single).is_empty() {
            if let Some(to) = Square::from_padded(single) {
                push_advance(from, to, color, moves);

                let double = step(single, push);
                if from.rank() == color.pawn_start_rank() && self.get(double).is_empty() {
                    if let Some(far) = Square::from_padded(double) {
                        moves.push(Move::new(MoveKind::PawnDouble {
                            from,
                            to: far,
                            en_passant: to,
                        }));
                    }
                }
            }
        }

        for offset in pawn_captures(color) {
            let target = step(origin, offset);
            let Some(to) = Square::from_padded(target) else {
                continue;
            };
            if self.get(target).is_color(color.opponent()) {
                push_advance(from, to, color, moves);
            } else if self.en_passant_target() == Some(to) {
                // the pawn that just double-pushed sits beside us, on our rank
                let captured = Square::new_unchecked(from.rank(), to.file());
                if self.piece_on(captured).is(PieceKind::Pawn, color.opponent()) {
                    moves.push(Move::new(MoveKind::EnPassant { from, to, captured }));
                }
            }
        }
    }
}

/// A push or capture to `to`, fanned out into four promotions on the last rank.
fn push_advance(from: Square, to: Square, color: Color, moves: &mut Vec<Move>) {
    if to.rank() == color.pawn_promotion_rank() {
        for piece in PieceKind::PROMOTIONS {
            moves.push(Move::new(MoveKind::Promotion { from, to, piece }));
        }
    } else {
        moves.push(Move::standard(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Board;
    use crate::board::{Color, MoveKind, PieceKind};

    #[test]
    fn test_promotions_queen_first() {
        let board = Board::from_fen_parts("1n6/P7/8/8/8/8/8/K1k5", "-", "-").unwrap();
        let a7 = "a7".parse().unwrap();
        let promos: Vec<PieceKind> = board
            .legal_moves_from(a7, Color::White)
            .iter()
            .filter_map(|m| m.promotion())
            .collect();
        assert_eq!(
            promos,
            vec![
                PieceKind::Queen,
                PieceKind::Rook,
                PieceKind::Bishop,
                PieceKind::Knight,
                PieceKind::Queen,
                PieceKind::Rook,
                PieceKind::Bishop,
                PieceKind::Knight,
            ]
        );
    }

    #[test]
    fn test_double_push_needs_both_squares_empty() {
        let board = Board::from_fen_parts("4k3/8/8/8/4n3/8/4P3/4K3", "-", "-").unwrap();
        let e2 = "e2".parse().unwrap();
        let moves = board.legal_moves_from(e2, Color::White);
        assert_eq!(moves.len(), 1);
        assert!(matches!(moves[0].kind(), MoveKind::Standard { .. }));

        let blocked = Board::from_fen_parts("4k3/8/8/8/8/4n3/4P3/4K3", "-", "-").unwrap();
        assert!(blocked.legal_moves_from(e2, Color::White).is_empty());
    }

    #[test]
    fn test_black_pawn_moves_down() {
        let board = Board::from_fen_parts("4k3/3p4/8/8/8/8/8/4K3", "-", "-").unwrap();
        let d7 = "d7".parse().unwrap();
        let mut moves: Vec<String> = board
            .legal_moves_from(d7, Color::Black)
            .iter()
            .map(|m| m.to_string())
            .collect();
        moves.sort();
        assert_eq!(moves, vec!["d7d5", "d7d6"]);
    }

    #[test]
    fn test_en_passant_offered_only_on_target() {
        let with_target = Board::from_fen_parts("4k3/8/8/3pP3/8/8/8/4K3", "-", "d6").unwrap();
        let e5 = "e5".parse().unwrap();
        assert!(with_target
            .legal_moves_from(e5, Color::White)
            .iter()
            .any(|m| m.is_en_passant()));

        let without = Board::from_fen_parts("4k3/8/8/3pP3/8/8/8/4K3", "-", "-").unwrap();
        assert!(!without
            .legal_moves_from(e5, Color::White)
            .iter()
            .any(|m| m.is_en_passant()));
    }
}
