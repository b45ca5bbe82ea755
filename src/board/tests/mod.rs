//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Leaf counts against published reference positions
//! - `draw.rs` - Draw detection (50-move, repetition, insufficient material)
//! - `edge_cases.rs` - Special positions and edge cases
//! - `proptest.rs` - Property-based tests

use crate::board::{Board, Color, FenFields};


/// Board and side to move from a FEN record.
fn position(fen: &str) -> (Board, Color) {
    let fields = FenFields::parse(fen).unwrap();
    let board = Board::from_fen_parts(&fields.placement, &fields.castling, &fields.en_passant).unwrap();
    (board, fields.side_to_move)
}

/// Legal moves of `color` in long algebraic form, sorted.
fn move_names(board: &Board, color: Color) -> Vec<String> {
    let mut names: Vec<String> = board.legal_moves(color).iter().map(ToString::to_string).collect();
    names.sort();
    names
}
