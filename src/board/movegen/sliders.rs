use super::super::{Board, Color, Move, Square};
use super::step;

/// Bishop directions.
pub(crate) const DIAGONAL_OFFSETS: [isize; 4] = [-13, -11, 11, 13];
/// Rook directions.
pub(crate) const ORTHOGONAL_OFFSETS: [isize; 4] = [-12, -1, 1, 12];

impl Board {
    /// Slide along each direction until the first non-empty cell; an enemy
    /// piece there is a capture, anything else ends the ray.
    pub(super) fn push_slide_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[isize],
        moves: &mut Vec<Move>,
    ) {
        let origin = from.padded();
        for &dir in directions {
            let mut target = step(origin, dir);
            loop {
                let piece = self.get(target);
                if !Self::is_open_to(piece, color) {
                    break;
                }
                if let Some(to) = Square::from_padded(target) {
                    moves.push(Move::standard(from, to));
                }
                if !piece.is_empty() {
                    break;
                }
                target = step(target, dir);
            }
        }
    }
}
