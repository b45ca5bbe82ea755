//! Chess board representation and rules.
//!
//! Uses a padded 12x12 mailbox so move generation can step by fixed offsets.
//! Supports full chess rules including castling, en passant, and promotions.
//!
//! # Example
//! ```
//! use mailbox_chess::board::{Board, Color};
//!
//! let board = Board::starting_position();
//! let moves = board.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod error;
mod fen;
mod make_move;
mod material;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveError, SquareError};
pub use fen::{FenFields, STARTING_FEN};
pub use material::MaterialIndex;
pub use state::Board;
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveKind, Piece, PieceKind, Square, SquareSet,
    SquareSetIter,
};
