use std::fmt;

use super::error::SquareError;
use super::material::MaterialIndex;
use super::types::PADDED_SIZE;
use super::{CastlingRights, Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Chess board on a padded 12x12 mailbox.
///
/// The 8x8 playing area sits inside a two-cell border of
/// [`Piece::INVALID`], so move generation can step by a fixed offset and
/// stop on the sentinel instead of checking coordinates. Padded indices stay
/// inside the `board` module; callers use [`Square`] or (rank, file).
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Piece; PADDED_SIZE],
    material: [MaterialIndex; 2],
    castling: CastlingRights,
    en_passant: Option<Square>,
}

impl Board {
    /// A board with no pieces and no rights.
    #[must_use]
    pub fn empty() -> Self {
        let mut squares = [Piece::INVALID; PADDED_SIZE];
        for idx in 0..64 {
            squares[Square::from_index(idx).padded()] = Piece::EMPTY;
        }
        Board {
            squares,
            material: [MaterialIndex::default(); 2],
            castling: CastlingRights::none(),
            en_passant: None,
        }
    }

    /// The standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            board.put(Square::new_unchecked(0, file), Piece::new(*kind, Color::White));
            board.put(Square::new_unchecked(1, file), Piece::new(PieceKind::Pawn, Color::White));
            board.put(Square::new_unchecked(6, file), Piece::new(PieceKind::Pawn, Color::Black));
            board.put(Square::new_unchecked(7, file), Piece::new(*kind, Color::Black));
        }
        board.castling = CastlingRights::all();
        board
    }

    /// Piece at (rank, file); range error outside 0..=7.
    pub fn piece_at(&self, rank: usize, file: usize) -> Result<Piece, SquareError> {
        Ok(self.piece_on(Square::new(rank, file)?))
    }

    /// Write a piece at (rank, file); range error outside 0..=7.
    ///
    /// Writing [`Piece::INVALID`] empties the square; the sentinel only
    /// lives on the border.
    pub fn set_piece(&mut self, rank: usize, file: usize, piece: Piece) -> Result<(), SquareError> {
        let sq = Square::new(rank, file)?;
        self.put(sq, piece);
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Piece {
        self.squares[sq.padded()]
    }

    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        let piece = if piece.is_valid() { piece } else { Piece::EMPTY };
        self.set(sq.padded(), piece);
    }

    /// Unchecked read by padded index.
    #[inline]
    pub(crate) fn get(&self, idx: usize) -> Piece {
        self.squares[idx]
    }

    /// Unchecked write by padded index. Diffs the outgoing piece against the
    /// incoming one to keep the material index exact.
    #[inline]
    pub(crate) fn set(&mut self, idx: usize, piece: Piece) {
        let old = self.squares[idx];
        if old == piece {
            return;
        }
        if let (Some(kind), Some(color), Some(sq)) = (old.kind(), old.color(), Square::from_padded(idx)) {
            self.material[color.index()].remove(kind, sq);
        }
        if let (Some(kind), Some(color), Some(sq)) = (piece.kind(), piece.color(), Square::from_padded(idx)) {
            self.material[color.index()].add(kind, sq);
        }
        self.squares[idx] = piece;
    }

    /// Read-only material index for one color
    #[inline]
    #[must_use]
    pub fn material(&self, color: Color) -> &MaterialIndex {
        &self.material[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub(crate) fn castling_rights_mut(&mut self) -> &mut CastlingRights {
        &mut self.castling
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub(crate) fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant = target;
    }

    /// Square of this color's king, if it has one
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.material(color).squares(PieceKind::King).first()
    }

    /// Every occupied square with its piece, a1 first
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..64).filter_map(move |idx| {
            let sq = Square::from_index(idx);
            let piece = self.piece_on(sq);
            piece.is_piece().then_some((sq, piece))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let piece = self.piece_on(Square::new_unchecked(rank, file));
                write!(f, "{}", piece.to_fen_char().unwrap_or('.'))?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("placement", &self.placement_fen())
            .field("castling", &self.castling_fen())
            .field("en_passant", &self.en_passant_fen())
            .finish()
    }
}
