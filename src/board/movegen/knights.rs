use super::super::{Board, Color, Move, Square};
use super::step;

/// Padded offsets of the eight knight jumps.
pub(crate) const KNIGHT_OFFSETS: [isize; 8] = [-25, -23, -14, -10, 10, 14, 23, 25];

impl Board {
    /// Single-step moves (knight or king) along each offset.
    pub(super) fn push_step_moves(
        &self,
        from: Square,
        color: Color,
        offsets: &[isize],
        moves: &mut Vec<Move>,
    ) {
        let origin = from.padded();
        for &offset in offsets {
            let target = step(origin, offset);
            if !Self::is_open_to(self.get(target), color) {
                continue;
            }
            if let Some(to) = Square::from_padded(target) {
                moves.push(Move::standard(from, to));
            }
        }
    }
}
