//! Core chess types.
//!
//! This module contains the value types shared by the board, the rules
//! engine and the search:
//! - `Piece`, `PieceKind` and `Color` - the one-byte piece codec
//! - `Square` and `SquareSet` - playing-area coordinates
//! - `Move` and `MoveKind` - the move sum type
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;
mod square_set;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};

pub(crate) use square::PADDED_SIZE;
#[cfg(test)]
pub(crate) use square::PADDED_WIDTH;
