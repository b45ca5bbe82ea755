//! FEN reading and writing.
//!
//! The board owns three FEN fields (placement, castling, en passant); the
//! clocks and side to move belong to the game. [`FenFields`] splits a full
//! FEN record into its six fields for whoever needs them.

use std::str::FromStr;

use super::error::FenError;
use super::{Board, CastleSide, CastlingRights, Color, Piece, Square};

/// Standard chess starting position in Forsyth-Edwards Notation.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// The six whitespace-separated fields of a FEN record.
///
/// Half-move and full-move fields are optional and default to 0 and 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FenFields {
    pub placement: String,
    pub side_to_move: Color,
    pub castling: String,
    pub en_passant: String,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl FenFields {
    /// Split and type-check a FEN record.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        Ok(FenFields {
            placement: parts[0].to_string(),
            side_to_move,
            castling: parts[2].to_string(),
            en_passant: parts[3].to_string(),
            halfmove_clock: parse_clock(parts.get(4).copied(), 0)?,
            fullmove_number: parse_clock(parts.get(5).copied(), 1)?,
        })
    }
}

impl FromStr for FenFields {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FenFields::parse(s)
    }
}

fn parse_clock(field: Option<&str>, default: u32) -> Result<u32, FenError> {
    match field {
        None => Ok(default),
        Some(text) => text.parse().map_err(|_| FenError::InvalidClock {
            found: text.to_string(),
        }),
    }
}

impl Board {
    /// Build a board from the placement, castling and en-passant FEN fields.
    pub fn from_fen_parts(placement: &str, castling: &str, en_passant: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        board.read_placement(placement)?;
        board.read_castling(castling)?;
        board.read_en_passant(en_passant)?;
        Ok(board)
    }

    fn read_placement(&mut self, placement: &str) -> Result<(), FenError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        // FEN lists rank 8 first
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - row;
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as usize;
                } else {
                    let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::WrongFileCount { rank: rank + 1, files: file + 1 });
                    }
                    self.put(Square::new_unchecked(rank, file), piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::WrongFileCount { rank: rank + 1, files: file });
            }
        }
        Ok(())
    }

    fn read_castling(&mut self, castling: &str) -> Result<(), FenError> {
        let mut rights = CastlingRights::none();
        if castling != "-" {
            for c in castling.chars() {
                let (color, side) = match c {
                    'K' => (Color::White, CastleSide::KingSide),
                    'Q' => (Color::White, CastleSide::QueenSide),
                    'k' => (Color::Black, CastleSide::KingSide),
                    'q' => (Color::Black, CastleSide::QueenSide),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                };
                rights.set(color, side);
            }
        }
        *self.castling_rights_mut() = rights;
        Ok(())
    }

    fn read_en_passant(&mut self, en_passant: &str) -> Result<(), FenError> {
        let target = if en_passant == "-" {
            None
        } else {
            let sq: Square = en_passant.parse().map_err(|_| FenError::InvalidEnPassant {
                found: en_passant.to_string(),
            })?;
            Some(sq)
        };
        self.set_en_passant_target(target);
        Ok(())
    }

    /// Placement field, rank 8 first.
    #[must_use]
    pub fn placement_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_on(Square::new_unchecked(rank, file)).to_fen_char() {
                    Some(c) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(c);
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }

    /// Castling field in KQkq order, `-` when no rights remain.
    #[must_use]
    pub fn castling_fen(&self) -> String {
        let rights = self.castling_rights();
        if rights.is_empty() {
            return "-".to_string();
        }
        rights
            .iter()
            .filter(|&(_, _, granted)| granted)
            .map(|(color, side, _)| {
                let c = match side {
                    CastleSide::KingSide => 'k',
                    CastleSide::QueenSide => 'q',
                };
                if color == Color::White {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect()
    }

    /// En-passant field, `-` when there is no target.
    #[must_use]
    pub fn en_passant_fen(&self) -> String {
        self.en_passant_target()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    #[test]
    fn test_starting_position_matches_fen() {
        let parsed = Board::from_fen_parts("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR", "KQkq", "-")
            .unwrap();
        assert_eq!(parsed, Board::starting_position());
    }

    #[test]
    fn test_component_round_trip() {
        let cases = [
            ("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR", "KQkq", "e3"),
            ("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R", "Kq", "-"),
            ("8/8/8/8/8/8/8/K1k5", "-", "-"),
            ("4k3/8/8/3pP3/8/8/8/4K3", "q", "d6"),
        ];
        for (placement, castling, ep) in cases {
            let board = Board::from_fen_parts(placement, castling, ep).unwrap();
            assert_eq!(board.placement_fen(), placement);
            assert_eq!(board.castling_fen(), castling);
            assert_eq!(board.en_passant_fen(), ep);
        }
    }

    #[test]
    fn test_fields_parse_full_record() {
        let fields = FenFields::parse(STARTING_FEN).unwrap();
        assert_eq!(fields.side_to_move, Color::White);
        assert_eq!(fields.castling, "KQkq");
        assert_eq!(fields.halfmove_clock, 0);
        assert_eq!(fields.fullmove_number, 1);
    }

    #[test]
    fn test_fields_default_clocks() {
        let fields = FenFields::parse("8/8/8/8/8/8/8/K1k5 b - -").unwrap();
        assert_eq!(fields.side_to_move, Color::Black);
        assert_eq!(fields.halfmove_clock, 0);
        assert_eq!(fields.fullmove_number, 1);
    }

    #[test]
    fn test_fen_error_too_few_parts() {
        let result = FenFields::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert!(matches!(result, Err(FenError::TooFewParts { .. })));
    }

    #[test]
    fn test_fen_error_invalid_side_to_move() {
        let result = FenFields::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_fen_error_invalid_clock() {
        let result = FenFields::parse("8/8/8/8/8/8/8/K1k5 w - - x 1");
        assert!(matches!(result, Err(FenError::InvalidClock { .. })));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let result = Board::from_fen_parts("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR", "KQkq", "-");
        assert!(matches!(result, Err(FenError::InvalidPiece { char: 'x' })));
    }

    #[test]
    fn test_fen_error_rank_shapes() {
        let short = Board::from_fen_parts("8/8/8/8/8/8/8", "-", "-");
        assert!(matches!(short, Err(FenError::WrongRankCount { found: 7 })));
        let wide = Board::from_fen_parts("9/8/8/8/8/8/8/8", "-", "-");
        assert!(matches!(wide, Err(FenError::InvalidPiece { char: '9' })));
        let long = Board::from_fen_parts("8p/8/8/8/8/8/8/8", "-", "-");
        assert!(matches!(long, Err(FenError::WrongFileCount { rank: 8, .. })));
        let narrow = Board::from_fen_parts("7/8/8/8/8/8/8/8", "-", "-");
        assert!(matches!(narrow, Err(FenError::WrongFileCount { rank: 8, files: 7 })));
    }

    #[test]
    fn test_fen_error_invalid_castling() {
        let result = Board::from_fen_parts("8/8/8/8/8/8/8/K1k5", "XQkq", "-");
        assert!(matches!(result, Err(FenError::InvalidCastling { char: 'X' })));
    }

    #[test]
    fn test_fen_error_invalid_en_passant() {
        let result = Board::from_fen_parts("8/8/8/8/8/8/8/K1k5", "-", "z9");
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn test_partial_castling() {
        let board = Board::from_fen_parts("r3k2r/8/8/8/8/8/8/R3K2R", "Kq", "-").unwrap();
        let rights = board.castling_rights();
        assert!(rights.has(Color::White, CastleSide::KingSide));
        assert!(!rights.has(Color::White, CastleSide::QueenSide));
        assert!(!rights.has(Color::Black, CastleSide::KingSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));
        assert_eq!(
            board.piece_on("h8".parse().unwrap()),
            Piece::new(PieceKind::Rook, Color::Black)
        );
    }
}
