//! Piece codec: kind, color, empty and off-board packed into one byte.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const KIND_MASK: u8 = 0b0000_0111;
const COLOR_MASK: u8 = 0b0001_1000;
const WHITE_BITS: u8 = 0b0000_1000;
const BLACK_BITS: u8 = 0b0001_0000;
const INVALID_BITS: u8 = KIND_MASK;

/// Chess piece kinds. The discriminants are the codec's 3-bit kind field.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    /// All kinds in codec order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Promotion choices, queen first
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Zero-based index (pawn = 0 .. king = 5) for per-kind tables.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    #[inline]
    const fn from_bits(bits: u8) -> Option<PieceKind> {
        match bits {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Parse a kind from a letter of either case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter for this kind
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Standard material value in centipawns.
    ///
    /// The king is given a large value so that material sums stay
    /// meaningful even though both kings are always present.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Scoring sign for evaluation (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn back_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_start_rank(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn pawn_promotion_rank(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    const fn bits(self) -> u8 {
        match self {
            Color::White => WHITE_BITS,
            Color::Black => BLACK_BITS,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Contents of one board cell.
///
/// Layout: bits 0-2 hold the kind (0 = empty), bits 3-4 hold the color
/// (`01` white, `10` black). The off-board sentinel uses kind bits `111`
/// with no color, so it never collides with an empty or occupied cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(u8);

impl Piece {
    /// An empty square. Has no color.
    pub const EMPTY: Piece = Piece(0);
    /// Padding cell outside the 8x8 playing area.
    pub const INVALID: Piece = Piece(INVALID_BITS);

    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece(kind as u8 | color.bits())
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == Self::EMPTY.0
    }

    /// Returns false only for the off-board sentinel
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }

    /// Returns true if the cell holds an actual piece
    #[inline]
    #[must_use]
    pub const fn is_piece(self) -> bool {
        self.kind().is_some()
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> Option<PieceKind> {
        if self.0 & COLOR_MASK == 0 {
            return None;
        }
        PieceKind::from_bits(self.0 & KIND_MASK)
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self.0 & COLOR_MASK {
            WHITE_BITS => Some(Color::White),
            BLACK_BITS => Some(Color::Black),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    #[inline]
    #[must_use]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self == Piece::new(kind, color)
    }

    /// Raw codec byte
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Parse a FEN piece letter (uppercase = white)
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    /// FEN letter, uppercase for white. `None` for empty and off-board cells.
    #[must_use]
    pub fn to_fen_char(self) -> Option<char> {
        let c = self.kind()?.to_char();
        match self.color()? {
            Color::White => Some(c.to_ascii_uppercase()),
            Color::Black => Some(c),
        }
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "Piece(invalid)");
        }
        match self.to_fen_char() {
            Some(c) => write!(f, "Piece({c})"),
            None => write!(f, "Piece(empty)"),
        }
    }
}

impl From<(PieceKind, Color)> for Piece {
    fn from((kind, color): (PieceKind, Color)) -> Self {
        Piece::new(kind, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_do_not_overlap() {
        for kind in PieceKind::ALL {
            for color in Color::BOTH {
                let piece = Piece::new(kind, color);
                assert_eq!(piece.kind(), Some(kind));
                assert_eq!(piece.color(), Some(color));
                assert!(piece.is_valid());
                assert!(!piece.is_empty());
            }
        }
    }

    #[test]
    fn test_empty_has_no_color() {
        assert!(Piece::EMPTY.is_empty());
        assert_eq!(Piece::EMPTY.color(), None);
        assert_eq!(Piece::EMPTY.kind(), None);
        assert!(Piece::EMPTY.is_valid());
    }

    #[test]
    fn test_invalid_is_distinct_from_empty() {
        assert_ne!(Piece::INVALID, Piece::EMPTY);
        assert!(!Piece::INVALID.is_valid());
        assert!(!Piece::INVALID.is_empty());
        assert_eq!(Piece::INVALID.kind(), None);
        assert_eq!(Piece::INVALID.color(), None);
    }

    #[test]
    fn test_fen_chars() {
        assert_eq!(
            Piece::from_fen_char('N'),
            Some(Piece::new(PieceKind::Knight, Color::White))
        );
        assert_eq!(
            Piece::from_fen_char('q'),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
        assert_eq!(Piece::from_fen_char('x'), None);
        assert_eq!(Piece::new(PieceKind::King, Color::White).to_fen_char(), Some('K'));
        assert_eq!(Piece::EMPTY.to_fen_char(), None);
    }

    #[test]
    fn test_kind_index_is_dense() {
        let indices: Vec<usize> = PieceKind::ALL.iter().map(|k| k.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }
}
